/// Two's-complement product of `a` and `b`; overflow wraps.
#[inline]
pub fn mul(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Serial dot product with wraparound at every multiply and add.
///
/// Both slices must have the same length; callers check this.
#[inline]
pub fn dot_wrapping(a: &[i32], b: &[i32]) -> i32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .fold(0i32, |acc, (&x, &y)| acc.wrapping_add(x.wrapping_mul(y)))
}
