use std::sync::RwLock;

use crate::error::{KernelError, Result};


/// Thresholds deciding when the parallel backend fans work out to rayon.
/// Below them the parallel backend runs the serial loops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KernelParameters {
    /// Minimum number of elements before `dot` is split into chunks.
    pub parallel_min_length: usize,
    /// Minimum number of 3-vectors before `cross_vectors` is split.
    pub parallel_min_vectors: usize,
    /// Elements (or vectors) per rayon task.
    pub parallel_chunk_size: usize,
}

impl KernelParameters {
    pub fn new() -> Self {
        Self {
            parallel_min_length: 65_536,
            parallel_min_vectors: 16_384,
            parallel_chunk_size: 8_192,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.parallel_chunk_size == 0 {
            return Err(KernelError::InvalidParameter {
                name: "parallel_chunk_size",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }
}

impl Default for KernelParameters {
    fn default() -> Self {
        Self::new()
    }
}

static PARAMETERS: RwLock<Option<KernelParameters>> = RwLock::new(None);

/// Install `params` process-wide. Invalid parameters are rejected and the
/// previous configuration stays in place.
pub fn configure(params: KernelParameters) -> Result<()> {
    params.validate()?;
    log::debug!("configuring kernel parameters: {params:?}");
    let mut guard = PARAMETERS.write().unwrap_or_else(|e| e.into_inner());
    *guard = Some(params);
    Ok(())
}

/// Parameters currently in effect.
pub fn current_parameters() -> KernelParameters {
    PARAMETERS
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .clone()
        .unwrap_or_default()
}

/// Drop any configured parameters and go back to the defaults.
pub fn reset_parameters() {
    let mut guard = PARAMETERS.write().unwrap_or_else(|e| e.into_inner());
    *guard = None;
}
