//! Keyboard transliteration
//!
//! Renders Hangul text as the keys typed on a 2-beolsik keyboard.

use super::jamo::lookup;
use super::syllable::decompose;

/// Transliterate `text` into 2-beolsik key presses.
///
/// Each syllable expands to the keys for its initial, medial and (if any)
/// final jamo. Every other character is copied unchanged, in order.
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        match decompose(c) {
            Some(syllable) => {
                out.push_str(&lookup(syllable.initial));
                out.push_str(&lookup(syllable.medial));
                if let Some(final_consonant) = syllable.final_consonant {
                    out.push_str(&lookup(final_consonant));
                }
            }
            None => out.push(c),
        }
    }

    out
}

/// Remove every space (multi-word translations contain them)
pub fn strip_spaces(text: &str) -> String {
    text.replace(' ', "")
}
