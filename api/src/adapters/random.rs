//! Random index source backed by the thread-local RNG

use rand::Rng;

use crate::domain::ports::IndexSource;

/// Uniform index source using `rand::thread_rng`
pub struct ThreadRngIndexSource;

impl IndexSource for ThreadRngIndexSource {
    fn pick_index(&self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }
}
