use rayon::prelude::*;

use super::{KernelBackend, Rank};
use crate::arithmetic::dot_wrapping;
use crate::geometry::cross_vectors_serial;
use crate::parameters::current_parameters;

/// Splits work across the global rayon pool once inputs pass the
/// thresholds in [`crate::parameters::KernelParameters`].
pub struct ParallelBackend;

impl KernelBackend for ParallelBackend {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn is_available(&self) -> bool {
        rayon::current_num_threads() > 1
    }

    fn priority(&self) -> Rank {
        Rank::Parallel
    }

    fn dot(&self, a: &[i32], b: &[i32]) -> i32 {
        let params = current_parameters();
        if a.len() < params.parallel_min_length {
            return dot_wrapping(a, b);
        }

        // Wrapping addition is associative, so the chunked sum is exact
        a.par_chunks(params.parallel_chunk_size)
            .zip(b.par_chunks(params.parallel_chunk_size))
            .map(|(a_chunk, b_chunk)| dot_wrapping(a_chunk, b_chunk))
            .reduce(|| 0i32, |x, y| x.wrapping_add(y))
    }

    fn cross_vectors(&self, u: &[f32], v: &[f32], w: &mut [f32]) {
        let params = current_parameters();
        let amount = w.len() / 3;
        if amount < params.parallel_min_vectors {
            return cross_vectors_serial(u, v, w);
        }

        let chunk_len = params.parallel_chunk_size.min(amount) * 3;
        w.par_chunks_mut(chunk_len)
            .zip(u.par_chunks(chunk_len))
            .zip(v.par_chunks(chunk_len))
            .for_each(|((w_chunk, u_chunk), v_chunk)| {
                cross_vectors_serial(u_chunk, v_chunk, w_chunk)
            });
    }
}
