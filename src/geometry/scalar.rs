/// Cross product of two 3-vectors.
#[inline]
pub fn cross(u: &[f32; 3], v: &[f32; 3]) -> [f32; 3] {
    [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ]
}

/// Serial batched cross product over packed 3-vectors.
///
/// All slices must have the same length, a multiple of 3; callers check this.
pub fn cross_vectors_serial(u: &[f32], v: &[f32], w: &mut [f32]) {
    debug_assert!(u.len() == w.len() && v.len() == w.len() && w.len() % 3 == 0);

    for ((uc, vc), wc) in u
        .chunks_exact(3)
        .zip(v.chunks_exact(3))
        .zip(w.chunks_exact_mut(3))
    {
        let result = cross(&[uc[0], uc[1], uc[2]], &[vc[0], vc[1], vc[2]]);
        wc.copy_from_slice(&result);
    }
}
