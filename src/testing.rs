//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so the test suites agree on one word list.

#![doc(hidden)]

use crate::validator::CodeValidator;

/// Canonical distracting-word fixture used across the test suites.
///
/// Mixed lengths, a digit-only word, and no word that is a subsequence of
/// another, so each one leads its own group.
pub const DISTRACTING_WORDS: &[&str] = &[
    "darn", "rats", "egg", "fuzzy", "kthx", "haha", "ugh", "777", "cheese",
];

/// Validator over the canonical fixture.
pub fn make_validator() -> CodeValidator {
    CodeValidator::new(DISTRACTING_WORDS.iter().copied())
}

/// Validator over an explicit word list.
pub fn make_validator_with_words(words: &[&str]) -> CodeValidator {
    CodeValidator::new(words.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_words_all_survive_filtering() {
        let validator = make_validator();
        assert_eq!(
            validator.word_groups().word_count(),
            DISTRACTING_WORDS.len()
        );
    }
}
