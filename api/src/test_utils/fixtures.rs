//! Test fixtures
//!
//! Factory functions for commonly used test collaborators.

use super::mocks::MockTranslator;

/// Translator knowing a handful of everyday words
pub fn house_and_mom_translator() -> MockTranslator {
    MockTranslator::new()
        .with_translation("house", "집")
        .with_translation("mom", "맘")
        .with_translation("apple", "사과")
        .with_translation("rice", "밥")
}
