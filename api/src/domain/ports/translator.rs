//! Translator port trait
//!
//! Defines the interface for the external text-translation service.

use async_trait::async_trait;

use crate::error::TranslationError;

/// Languages the service translates between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Korean,
}

impl Language {
    /// ISO 639-1 code understood by translation providers
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Korean => "ko",
        }
    }
}

/// Port trait for text translation
///
/// One call is one attempt; retries and fallbacks belong to the caller.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `source` to `target`
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, TranslationError>;
}
