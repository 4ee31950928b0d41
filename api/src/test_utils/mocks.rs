//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They count calls so tests can verify retry and short-circuit behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::ports::{IndexSource, Language, Translator};
use crate::error::TranslationError;

// ============================================================================
// Mock Translator
// ============================================================================

/// Scripted translator. Unknown words are echoed back.
#[derive(Default)]
pub struct MockTranslator {
    translations: HashMap<String, String>,
    fail_first: usize,
    calls: AtomicUsize,
}

impl MockTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate `word` to `translation`
    pub fn with_translation(mut self, word: &str, translation: &str) -> Self {
        self.translations
            .insert(word.to_string(), translation.to_string());
        self
    }

    /// Fail the first `n` calls with a 503
    pub fn failing_first(mut self, n: usize) -> Self {
        self.fail_first = n;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _source: Language,
        _target: Language,
    ) -> Result<String, TranslationError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.fail_first {
            return Err(TranslationError::Api {
                status: 503,
                message: "Service unavailable".to_string(),
            });
        }

        Ok(self
            .translations
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string()))
    }
}

// ============================================================================
// Failing Translator
// ============================================================================

/// Translator that always fails
#[derive(Default)]
pub struct FailingTranslator {
    calls: AtomicUsize,
}

impl FailingTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for FailingTranslator {
    async fn translate(
        &self,
        _text: &str,
        _source: Language,
        _target: Language,
    ) -> Result<String, TranslationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(TranslationError::RateLimited)
    }
}

// ============================================================================
// Fixed Index Source
// ============================================================================

/// Index source pinned to one position (clamped to the valid range)
pub struct FixedIndexSource(pub usize);

impl IndexSource for FixedIndexSource {
    fn pick_index(&self, upper: usize) -> usize {
        self.0.min(upper - 1)
    }
}
