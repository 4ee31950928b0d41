//! Password assembler
//!
//! Joins the keyboard words around the symbol and uppercases one random letter.

use crate::domain::ports::IndexSource;

/// Raw and capitalized password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledPassword {
    pub raw: String,
    pub final_password: String,
}

/// Concatenate `keyboard_word1 + symbol + keyboard_word2` and capitalize one letter
pub fn assemble(
    keyboard_word1: &str,
    symbol: &str,
    keyboard_word2: &str,
    index_source: &dyn IndexSource,
) -> AssembledPassword {
    let raw = format!("{}{}{}", keyboard_word1, symbol, keyboard_word2);
    let final_password = capitalize_one_letter(&raw, index_source);
    AssembledPassword {
        raw,
        final_password,
    }
}

/// Uppercase one alphabetic character chosen uniformly among all of them.
///
/// Text without letters is returned unchanged. A letter whose uppercase
/// form is more than one character (e.g. `ß`) is left as is so the
/// character count never changes.
pub fn capitalize_one_letter(text: &str, index_source: &dyn IndexSource) -> String {
    let letters: Vec<usize> = text
        .chars()
        .enumerate()
        .filter(|(_, c)| c.is_alphabetic())
        .map(|(i, _)| i)
        .collect();

    if letters.is_empty() {
        return text.to_string();
    }

    let Some(&target) = letters.get(index_source.pick_index(letters.len())) else {
        return text.to_string();
    };

    text.chars()
        .enumerate()
        .map(|(i, c)| if i == target { single_uppercase(c) } else { c })
        .collect()
}

fn single_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
