//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod randomness;
pub mod translator;

pub use randomness::IndexSource;
pub use translator::{Language, Translator};
