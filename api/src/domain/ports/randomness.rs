//! Random index port
//!
//! Source of random positions for the capitalization step, injectable so
//! tests can pin the choice.

/// Port trait for choosing a random index
pub trait IndexSource: Send + Sync {
    /// Pick an index in `0..upper`. Callers guarantee `upper > 0`.
    fn pick_index(&self, upper: usize) -> usize;
}
