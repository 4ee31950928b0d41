//! Test utilities
//!
//! Scripted translators and a pinned index source for unit tests.
//! The translators count their calls so tests can assert on retries.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
