//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Request-scoped value types
//! - `hangul`: Syllable decomposition and keyboard transliteration
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod hangul;
pub mod ports;
