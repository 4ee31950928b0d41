//! Hangul syllable decomposition
//!
//! Splits a precomposed syllable (U+AC00..=U+D7A3) into its initial,
//! medial and optional final jamo, and composes them back.

use super::jamo::{FINALS, INITIALS, MEDIALS};

/// First precomposed syllable (가)
const SYLLABLE_BASE: u32 = 0xAC00;
/// Last precomposed syllable (힣)
const SYLLABLE_LAST: u32 = 0xD7A3;

const MEDIAL_COUNT: u32 = 21;
/// Finals including "no final"
const FINAL_COUNT: u32 = 28;
/// Syllables sharing one initial consonant
const BLOCK_SIZE: u32 = MEDIAL_COUNT * FINAL_COUNT;

/// A syllable split into its jamo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecomposedSyllable {
    pub initial: char,
    pub medial: char,
    pub final_consonant: Option<char>,
}

/// Whether `c` is a precomposed Hangul syllable.
///
/// Standalone jamo are not syllables.
pub fn is_syllable(c: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(c as u32))
}

/// Split a syllable into jamo. Returns `None` for anything else.
pub fn decompose(c: char) -> Option<DecomposedSyllable> {
    if !is_syllable(c) {
        return None;
    }

    let offset = c as u32 - SYLLABLE_BASE;
    let initial = (offset / BLOCK_SIZE) as usize;
    let medial = ((offset % BLOCK_SIZE) / FINAL_COUNT) as usize;
    let final_index = (offset % FINAL_COUNT) as usize;

    Some(DecomposedSyllable {
        initial: INITIALS[initial],
        medial: MEDIALS[medial],
        final_consonant: FINALS[final_index],
    })
}

/// Inverse of [`decompose`]. Returns `None` if a glyph cannot take its slot.
#[cfg(test)]
pub fn compose(initial: char, medial: char, final_consonant: Option<char>) -> Option<char> {
    let initial = INITIALS.iter().position(|&j| j == initial)? as u32;
    let medial = MEDIALS.iter().position(|&j| j == medial)? as u32;
    let final_index = FINALS.iter().position(|&j| j == final_consonant)? as u32;

    char::from_u32(SYLLABLE_BASE + initial * BLOCK_SIZE + medial * FINAL_COUNT + final_index)
}

#[cfg(test)]
impl DecomposedSyllable {
    /// Compose the jamo back into a syllable
    pub fn compose(&self) -> Option<char> {
        compose(self.initial, self.medial, self.final_consonant)
    }
}
