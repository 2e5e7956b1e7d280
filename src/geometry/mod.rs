use crate::error::{KernelError, Result};

pub mod scalar;

pub use scalar::{cross, cross_vectors_serial};


/// Cross product of `u` and `v` written into `w`.
///
/// Each slice must hold exactly three elements.
pub fn cross_into(u: &[f32], v: &[f32], w: &mut [f32]) -> Result<()> {
    let u = as_vector3(u)?;
    let v = as_vector3(v)?;
    if w.len() != 3 {
        return Err(KernelError::InvalidLength {
            expected: 3,
            got: w.len(),
        });
    }
    w.copy_from_slice(&cross(&u, &v));
    Ok(())
}

/// Batched cross product over `w.len() / 3` packed 3-vectors.
///
/// Vector `i` occupies `[3i, 3i + 3)` in each buffer. The three buffers must
/// share one length and that length must be a multiple of 3. Empty buffers
/// are a no-op.
///
/// ```
/// # use ctkernels::geometry::cross_vectors;
/// let u = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
/// let v = [0.0, 1.0, 0.0, 1.0, 0.0, 0.0];
/// let mut w = [0.0; 6];
/// cross_vectors(&u, &v, &mut w).unwrap();
/// assert_eq!(w, [0.0, 0.0, 1.0, 0.0, 0.0, -1.0]);
/// ```
pub fn cross_vectors(u: &[f32], v: &[f32], w: &mut [f32]) -> Result<()> {
    for len in [u.len(), v.len()] {
        if len != w.len() {
            return Err(KernelError::InvalidLength {
                expected: w.len(),
                got: len,
            });
        }
    }
    if w.len() % 3 != 0 {
        return Err(KernelError::InvalidLength {
            expected: w.len() - w.len() % 3,
            got: w.len(),
        });
    }
    if w.is_empty() {
        return Ok(());
    }
    crate::backend::get_backend().cross_vectors(u, v, w);
    Ok(())
}

/// Batched cross product over the first `amount` 3-vectors of each buffer.
pub fn cross_vectors_n(u: &[f32], v: &[f32], w: &mut [f32], amount: usize) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let needed = amount
        .checked_mul(3)
        .ok_or(KernelError::InvalidLength {
            expected: usize::MAX,
            got: w.len(),
        })?;
    let capacity = u.len().min(v.len()).min(w.len());
    if needed > capacity {
        return Err(KernelError::InvalidLength {
            expected: needed,
            got: capacity,
        });
    }
    cross_vectors(&u[..needed], &v[..needed], &mut w[..needed])
}

fn as_vector3(values: &[f32]) -> Result<[f32; 3]> {
    match values {
        &[x, y, z] => Ok([x, y, z]),
        _ => Err(KernelError::InvalidLength {
            expected: 3,
            got: values.len(),
        }),
    }
}
