use crate::error::{KernelError, Result};

pub mod scalar;

pub use scalar::{dot_wrapping, mul};


/// Integer dot product `sum(a[i] * b[i])` with wraparound on overflow.
///
/// Returns [`KernelError::InvalidLength`] when the slices differ in length.
/// Empty input yields `0`.
///
/// ```
/// # use ctkernels::arithmetic::dot;
/// assert_eq!(dot(&[1, 2, 3], &[4, 5, 6]).unwrap(), 32);
/// ```
pub fn dot(a: &[i32], b: &[i32]) -> Result<i32> {
    if a.len() != b.len() {
        return Err(KernelError::InvalidLength {
            expected: a.len(),
            got: b.len(),
        });
    }
    if a.is_empty() {
        return Ok(0);
    }
    Ok(crate::backend::get_backend().dot(a, b))
}

/// Dot product over the first `length` elements of `a` and `b`.
///
/// Mirrors the pointer-plus-count calling convention: the buffers may be
/// longer than `length`, but not shorter.
pub fn dot_n(a: &[i32], b: &[i32], length: usize) -> Result<i32> {
    if length == 0 {
        return Ok(0);
    }
    let capacity = a.len().min(b.len());
    if length > capacity {
        return Err(KernelError::InvalidLength {
            expected: length,
            got: capacity,
        });
    }
    dot(&a[..length], &b[..length])
}
