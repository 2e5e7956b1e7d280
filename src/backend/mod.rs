//! Execution backends for the kernels.
//!
//! Every backend produces identical results; they differ only in how the
//! work is scheduled. Selection order is: explicit override via
//! [`set_backend`], then the `CTKERNELS_BACKEND` environment variable, then
//! the highest-ranked available backend.

use std::sync::{OnceLock, RwLock};

use crate::error::{KernelError, Result};

pub mod parallel;
pub mod serial;

pub use parallel::ParallelBackend;
pub use serial::SerialBackend;


/// Environment variable naming the backend to use when no override is set.
pub const BACKEND_ENV_VAR: &str = "CTKERNELS_BACKEND";

/// Selection priority; higher ranks win when available.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    Serial = 0,
    Parallel = 1,
}

pub trait KernelBackend: Send + Sync {
    fn name(&self) -> &'static str;

    fn is_available(&self) -> bool;

    fn priority(&self) -> Rank;

    /// Wrapping dot product. `a` and `b` have equal, non-zero length.
    fn dot(&self, a: &[i32], b: &[i32]) -> i32;

    /// Batched cross product. All slices share one length, a multiple of 3.
    fn cross_vectors(&self, u: &[f32], v: &[f32], w: &mut [f32]);
}

pub static SERIAL: SerialBackend = SerialBackend;
pub static PARALLEL: ParallelBackend = ParallelBackend;

static BACKENDS: [&dyn KernelBackend; 2] = [&SERIAL, &PARALLEL];

static BACKEND_OVERRIDE: RwLock<Option<&'static dyn KernelBackend>> = RwLock::new(None);

static ENV_BACKEND: OnceLock<Option<&'static dyn KernelBackend>> = OnceLock::new();

fn find_backend(name: &str) -> Option<&'static dyn KernelBackend> {
    let name = name.trim();
    BACKENDS
        .iter()
        .copied()
        .find(|backend| backend.name().eq_ignore_ascii_case(name))
}

/// Look up an available backend by name.
pub fn backend_by_name(name: &str) -> Result<&'static dyn KernelBackend> {
    let backend = find_backend(name).ok_or_else(|| KernelError::UnknownBackend {
        name: name.to_string(),
    })?;
    if !backend.is_available() {
        return Err(KernelError::BackendUnavailable {
            name: backend.name().to_string(),
        });
    }
    Ok(backend)
}

fn resolve_env_backend(value: Option<&str>) -> Option<&'static dyn KernelBackend> {
    let name = value?;
    match backend_by_name(name) {
        Ok(backend) => {
            log::debug!("{BACKEND_ENV_VAR} selects `{}` backend", backend.name());
            Some(backend)
        }
        Err(err) => {
            log::warn!("ignoring {BACKEND_ENV_VAR}: {err}");
            None
        }
    }
}

fn env_backend() -> Option<&'static dyn KernelBackend> {
    *ENV_BACKEND.get_or_init(|| {
        let value = std::env::var(BACKEND_ENV_VAR).ok();
        resolve_env_backend(value.as_deref())
    })
}

fn best_available() -> &'static dyn KernelBackend {
    BACKENDS
        .iter()
        .copied()
        .filter(|backend| backend.is_available())
        .max_by_key(|backend| backend.priority())
        .unwrap_or(&SERIAL as &dyn KernelBackend)
}

/// The backend the kernels dispatch to right now.
pub fn get_backend() -> &'static dyn KernelBackend {
    let override_backend = *BACKEND_OVERRIDE.read().unwrap_or_else(|e| e.into_inner());
    override_backend
        .or_else(env_backend)
        .unwrap_or_else(best_available)
}

/// Force a backend by name. Unknown or unavailable names are rejected and
/// the current selection is kept.
pub fn set_backend(name: &str) -> Result<()> {
    let backend = backend_by_name(name)?;
    log::debug!("overriding kernel backend with `{}`", backend.name());
    *BACKEND_OVERRIDE.write().unwrap_or_else(|e| e.into_inner()) = Some(backend);
    Ok(())
}

/// Remove an override installed by [`set_backend`].
pub fn clear_backend() {
    *BACKEND_OVERRIDE.write().unwrap_or_else(|e| e.into_inner()) = None;
}

/// Name of the backend that [`get_backend`] currently resolves to.
pub fn get_optimal_backend() -> &'static str {
    get_backend().name()
}

/// Names of all compiled-in backends, available or not.
pub fn backend_names() -> Vec<&'static str> {
    BACKENDS.iter().map(|backend| backend.name()).collect()
}
