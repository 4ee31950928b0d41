//! Password service
//!
//! Orchestrates a generation request: validate, translate, transliterate, assemble.

use std::sync::Arc;

use crate::app::password_assembler::assemble;
use crate::app::translation_service::{RetryPolicy, TranslationService};
use crate::domain::entities::{GeneratedPassword, PasswordInput};
use crate::domain::hangul::{strip_spaces, transliterate};
use crate::domain::ports::{IndexSource, Translator};
use crate::error::AppError;

/// Service for generating keyboard passwords
pub struct PasswordService<T>
where
    T: Translator + ?Sized,
{
    translation: TranslationService<T>,
    index_source: Arc<dyn IndexSource>,
}

impl<T> PasswordService<T>
where
    T: Translator + ?Sized,
{
    pub fn new(
        translator: Arc<T>,
        policy: RetryPolicy,
        index_source: Arc<dyn IndexSource>,
    ) -> Self {
        Self {
            translation: TranslationService::new(translator, policy),
            index_source,
        }
    }

    /// Generate a password from two English words and a separator symbol.
    ///
    /// Validation runs first; nothing is translated for invalid input.
    pub async fn generate(
        &self,
        word1: &str,
        symbol: &str,
        word2: &str,
    ) -> Result<GeneratedPassword, AppError> {
        let input = PasswordInput::new(word1, symbol, word2)?;

        let korean_word1 = self.translation.to_korean(&input.word1).await;
        let korean_word2 = self.translation.to_korean(&input.word2).await;

        let keyboard_word1 = strip_spaces(&transliterate(&korean_word1));
        let keyboard_word2 = strip_spaces(&transliterate(&korean_word2));

        let assembled = assemble(
            &keyboard_word1,
            &input.symbol,
            &keyboard_word2,
            self.index_source.as_ref(),
        );

        tracing::debug!(raw_len = assembled.raw.chars().count(), "Generated password");

        Ok(GeneratedPassword {
            korean_word1,
            korean_word2,
            keyboard_word1,
            keyboard_word2,
            raw_password: assembled.raw,
            final_password: assembled.final_password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::error::DomainError;
    use crate::test_utils::{
        house_and_mom_translator, FailingTranslator, FixedIndexSource, MockTranslator,
    };

    fn no_delay() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            delay: Duration::ZERO,
        }
    }

    fn create_service<T: Translator>(translator: Arc<T>, index: usize) -> PasswordService<T> {
        PasswordService::new(translator, no_delay(), Arc::new(FixedIndexSource(index)))
    }

    #[tokio::test]
    async fn generate_house_and_mom() {
        let translator = Arc::new(house_and_mom_translator());
        let service = create_service(translator.clone(), 0);

        let password = service.generate("house", "!", "mom").await.unwrap();

        assert_eq!(password.korean_word1, "집");
        assert_eq!(password.korean_word2, "맘");
        assert_eq!(password.keyboard_word1, "wlq");
        assert_eq!(password.keyboard_word2, "aka");
        assert_eq!(password.raw_password, "wlq!aka");
        assert_eq!(password.final_password, "Wlq!aka");
        assert_eq!(translator.calls(), 2);
    }

    #[tokio::test]
    async fn spaces_in_translation_are_removed() {
        let translator = Arc::new(
            MockTranslator::new()
                .with_translation("apple tree", "사과 나무")
                .with_translation("cat", "고양이"),
        );
        let service = create_service(translator, 0);

        let password = service.generate("apple tree", "#", "cat").await.unwrap();

        assert_eq!(password.korean_word1, "사과 나무");
        assert_eq!(password.keyboard_word1, "tkrhkskan");
        assert_eq!(password.keyboard_word2, "rhdiddl");
        assert_eq!(password.raw_password, "tkrhkskan#rhdiddl");
    }

    #[tokio::test]
    async fn fields_are_trimmed_before_translation() {
        let translator = Arc::new(house_and_mom_translator());
        let service = create_service(translator, 0);

        let password = service.generate("  house ", " ! ", " mom").await.unwrap();

        assert_eq!(password.raw_password, "wlq!aka");
    }

    #[tokio::test]
    async fn translation_outage_still_produces_password() {
        let translator = Arc::new(FailingTranslator::new());
        let service = create_service(translator.clone(), 1);

        let password = service.generate("sun", "1", "sky").await.unwrap();

        assert_eq!(password.korean_word1, "sun");
        assert_eq!(password.keyboard_word1, "sun");
        assert_eq!(password.raw_password, "sun1sky");
        assert_eq!(password.final_password, "sUn1sky");
        assert_eq!(translator.calls(), 6);
    }

    #[tokio::test]
    async fn invalid_input_skips_translation() {
        let translator = Arc::new(house_and_mom_translator());
        let service = create_service(translator.clone(), 0);

        let result = service.generate("", "!", "mom").await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::Validation(_)))
        ));
        assert_eq!(translator.calls(), 0);
    }

    #[tokio::test]
    async fn long_symbol_is_rejected() {
        let translator = Arc::new(house_and_mom_translator());
        let service = create_service(translator.clone(), 0);

        let result = service.generate("house", "!!!!!!", "mom").await;

        assert!(result.is_err());
        assert_eq!(translator.calls(), 0);
    }

    #[tokio::test]
    async fn symbol_only_password_is_unchanged() {
        let translator = Arc::new(
            MockTranslator::new()
                .with_translation("one", "1")
                .with_translation("two", "2"),
        );
        let service = create_service(translator, 0);

        let password = service.generate("one", "-", "two").await.unwrap();

        assert_eq!(password.raw_password, "1-2");
        assert_eq!(password.final_password, "1-2");
    }
}
