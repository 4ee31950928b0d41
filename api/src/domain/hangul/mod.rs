//! Hangul processing
//!
//! Pure functions for turning Hangul text into 2-beolsik keystrokes.
//! - `jamo`: jamo → key table
//! - `syllable`: syllable decomposition
//! - `keyboard`: string-level transliteration

pub mod jamo;
pub mod keyboard;
pub mod syllable;

pub use keyboard::{strip_spaces, transliterate};
