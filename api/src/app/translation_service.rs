//! Translation service
//!
//! Wraps a [`Translator`] with a bounded retry loop and a pass-through
//! fallback, so translation trouble never fails a request.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::ports::{Language, Translator};

/// Attempts per word before falling back
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Pause between attempts
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(400);

/// Retry settings for translation calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            delay: DEFAULT_RETRY_DELAY,
        }
    }
}

/// Service for translating words with retries
pub struct TranslationService<T>
where
    T: Translator + ?Sized,
{
    translator: Arc<T>,
    policy: RetryPolicy,
}

impl<T> TranslationService<T>
where
    T: Translator + ?Sized,
{
    pub fn new(translator: Arc<T>, policy: RetryPolicy) -> Self {
        Self { translator, policy }
    }

    /// Translate an English word into Korean
    pub async fn to_korean(&self, word: &str) -> String {
        self.translate(word, Language::English, Language::Korean).await
    }

    /// Translate `word`, returning it unchanged if the provider keeps failing
    /// or comes back empty. Empty input never reaches the provider.
    pub async fn translate(&self, word: &str, source: Language, target: Language) -> String {
        if word.is_empty() {
            return String::new();
        }

        let max_attempts = self.policy.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            tracing::debug!(
                attempt,
                source = source.code(),
                target = target.code(),
                "Translating word"
            );

            match self.translator.translate(word, source, target).await {
                Ok(text) if text.trim().is_empty() => {
                    tracing::warn!(attempt, "Translation came back empty, using original word");
                    return word.to_string();
                }
                Ok(text) => return text,
                Err(e) => {
                    tracing::warn!(error = %e, attempt, max_attempts, "Translation attempt failed");
                    if attempt < max_attempts {
                        tokio::time::sleep(self.policy.delay).await;
                    }
                }
            }
        }

        tracing::warn!(max_attempts, "Translation unavailable, using original word");
        word.to_string()
    }
}
