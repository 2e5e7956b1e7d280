//! Error types for the kernel crate.

use thiserror::Error;

/// Rejected preconditions of the kernels and their configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Buffer lengths are inconsistent with the requested element count.
    #[error("invalid length: expected {expected}, got {got}")]
    InvalidLength { expected: usize, got: usize },

    /// A null pointer was passed together with a non-zero count.
    #[error("null buffer passed for `{argument}`")]
    NullBuffer { argument: &'static str },

    /// A numpy array is not laid out contiguously in memory.
    #[error("array `{argument}` must be C-contiguous")]
    NonContiguous { argument: &'static str },

    #[error("unknown backend `{name}`")]
    UnknownBackend { name: String },

    #[error("backend `{name}` is not available on this machine")]
    BackendUnavailable { name: String },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
}

/// Result type alias for kernel operations.
pub type Result<T> = std::result::Result<T, KernelError>;

#[cfg(feature = "python")]
impl From<KernelError> for pyo3::PyErr {
    fn from(err: KernelError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
