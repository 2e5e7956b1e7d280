//! Small integer and 3-D vector kernels for native-extension callers.
//!
//! The kernels are exposed three ways: as safe Rust functions over slices
//! ([`arithmetic`], [`geometry`]), as an unmangled C ABI ([`ffi`]) for
//! `ctypes`-style loaders, and as a Python extension module when built with
//! the `python` feature.

pub mod arithmetic;
pub mod backend;
pub mod error;
pub mod ffi;
pub mod geometry;
pub mod parameters;

#[cfg(feature = "python")]
mod python;

pub use arithmetic::{dot, dot_n, mul};
pub use backend::{clear_backend, get_optimal_backend, set_backend, KernelBackend, Rank};
pub use error::{KernelError, Result};
pub use geometry::{cross, cross_into, cross_vectors, cross_vectors_n};
pub use parameters::{configure, current_parameters, KernelParameters};
