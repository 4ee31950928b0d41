//! Password entities
//!
//! Validated generation input and the derived password payload.

use crate::error::DomainError;

/// Maximum characters allowed for each word
pub const MAX_WORD_CHARS: usize = 50;

/// Maximum characters allowed for the separator symbol
pub const MAX_SYMBOL_CHARS: usize = 5;

/// Generation input after trimming and bounds checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordInput {
    pub word1: String,
    pub symbol: String,
    pub word2: String,
}

impl PasswordInput {
    /// Trim and validate raw request fields.
    ///
    /// All three fields must be non-empty after trimming; words are limited
    /// to [`MAX_WORD_CHARS`] and the symbol to [`MAX_SYMBOL_CHARS`].
    pub fn new(word1: &str, symbol: &str, word2: &str) -> Result<Self, DomainError> {
        let word1 = required("word1", word1)?;
        let symbol = required("symbol", symbol)?;
        let word2 = required("word2", word2)?;

        within_limit("word1", word1, MAX_WORD_CHARS)?;
        within_limit("word2", word2, MAX_WORD_CHARS)?;
        within_limit("symbol", symbol, MAX_SYMBOL_CHARS)?;

        Ok(Self {
            word1: word1.to_string(),
            symbol: symbol.to_string(),
            word2: word2.to_string(),
        })
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed)
}

fn within_limit(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.chars().count() > max {
        return Err(DomainError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

/// Every stage of a generated password, returned so clients can show the derivation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPassword {
    pub korean_word1: String,
    pub korean_word2: String,
    pub keyboard_word1: String,
    pub keyboard_word2: String,
    pub raw_password: String,
    pub final_password: String,
}
