use super::{KernelBackend, Rank};
use crate::arithmetic::dot_wrapping;
use crate::geometry::cross_vectors_serial;

pub struct SerialBackend;

impl KernelBackend for SerialBackend {
    fn name(&self) -> &'static str {
        "serial"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn priority(&self) -> Rank {
        Rank::Serial
    }

    fn dot(&self, a: &[i32], b: &[i32]) -> i32 {
        dot_wrapping(a, b)
    }

    fn cross_vectors(&self, u: &[f32], v: &[f32], w: &mut [f32]) {
        cross_vectors_serial(u, v, w)
    }
}
