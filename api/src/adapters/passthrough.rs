//! Passthrough translator
//!
//! Returns its input unchanged. Used when no translation provider is configured.

use async_trait::async_trait;

use crate::domain::ports::{Language, Translator};
use crate::error::TranslationError;

/// No-op translator
pub struct PassthroughTranslator;

#[async_trait]
impl Translator for PassthroughTranslator {
    async fn translate(
        &self,
        text: &str,
        _source: Language,
        _target: Language,
    ) -> Result<String, TranslationError> {
        Ok(text.to_string())
    }
}
