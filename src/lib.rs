//! Class-code validation with subsequence-based word screening.
//!
//! A class code is six ASCII letters or digits, compared case-insensitively.
//! A candidate is rejected when it is malformed, when it was already accepted
//! earlier, or when a "distracting word" occurs inside it as a possibly
//! non-contiguous subsequence: `"RATS42"` and `"3RQATS"` both contain
//! `"rats"`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────┐
//! │  pattern.rs  │────▶│  wordlist.rs │────▶│  validator.rs │
//! │ (is_valid_*, │     │ (WordGroups) │     │ (CodeValidator│
//! │  normalize)  │     │              │     │ validate_code)│
//! └──────────────┘     └──────────────┘     └───────────────┘
//!        │                    │                     │
//!        ▼                    ▼                     ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                     subsequence.rs                      │
//! │     (contains_subsequence - the one canonical scan)     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Word lists are prepared once into [`WordGroups`]: invalid words dropped,
//! the rest lowercased, deduplicated, and partitioned so that only a group's
//! shortest word (its representative) has to be probed per candidate. The
//! grouping is purely a performance shortcut; `contracts` pins the property
//! that it never changes an accept/reject decision.
//!
//! # Usage
//!
//! ```
//! use classcode::CodeValidator;
//!
//! let mut validator = CodeValidator::new(["rats", "darn"]);
//! assert!(validator.validate("AEU7CH"));
//! assert!(!validator.validate("aeu7ch")); // already accepted, any casing
//! assert!(!validator.validate("RA1TSF")); // r·a·t·s in order, gaps allowed
//! ```
//!
//! The stateless shape is [`validate_code`]; the thread-safe registry is
//! [`SharedValidator`].

// Module declarations
pub mod contracts;
mod pattern;
mod shared;
mod subsequence;
pub mod testing;
mod types;
mod validator;
mod wordlist;

// Re-exports for public API
pub use pattern::{is_valid_code, is_valid_word, normalize};
pub use shared::SharedValidator;
pub use subsequence::contains_subsequence;
pub use types::{Outcome, CODE_LENGTH};
pub use validator::{validate_code, CodeValidator};
pub use wordlist::WordGroups;

#[cfg(test)]
mod tests {
    //! Cross-module tests: the behaviors promised in the crate docs,
    //! exercised end to end through the public API.

    use super::*;
    use proptest::prelude::*;
    use proptest::string::string_regex;

    fn code_strategy() -> impl Strategy<Value = String> {
        string_regex("[A-Za-z0-9]{6}").unwrap()
    }

    fn word_list_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(string_regex("[A-Za-z0-9]{1,8}").unwrap(), 0..12)
    }

    #[test]
    fn accepts_then_rejects_reuse_any_casing() {
        let mut validator = CodeValidator::new(Vec::<String>::new());
        assert!(validator.validate("AAA123"));
        assert!(!validator.validate("aAa123"));
        assert!(!validator.validate("AAA123"));
    }

    #[test]
    fn screening_applies_before_acceptance() {
        let mut validator = CodeValidator::new(["rats"]);
        assert!(!validator.validate("RATS42"));
        // The rejected code was never recorded as existing.
        assert_eq!(validator.accepted_count(), 0);
    }

    #[test]
    fn invalid_words_impose_no_restriction() {
        let mut validator = CodeValidator::new(["", "   ", "+-.", "abCdEfG"]);
        assert!(validator.validate("ABCDEF"));
    }

    proptest! {
        /// Anything failing the pattern gate is rejected, stateless or not.
        #[test]
        fn malformed_codes_always_rejected(code in "\\PC*") {
            prop_assume!(!is_valid_code(&code));
            let mut validator = CodeValidator::new(Vec::<String>::new());
            prop_assert!(!validator.validate(&code));
            prop_assert!(!validate_code(&code, &[] as &[&str], &[] as &[&str]));
        }

        /// The grouped stateful shape and the flat stateless shape agree on
        /// the first submission of any candidate.
        #[test]
        fn stateful_and_stateless_shapes_agree(
            code in code_strategy(),
            words in word_list_strategy(),
        ) {
            let mut validator = CodeValidator::new(words.iter());
            let stateful = validator.validate(&code);
            let stateless = validate_code(&code, &words, &[] as &[&str]);
            prop_assert_eq!(stateful, stateless);
        }

        /// A code is accepted at most once per validator lifetime.
        #[test]
        fn acceptance_is_at_most_once(
            code in code_strategy(),
            words in word_list_strategy(),
        ) {
            let mut validator = CodeValidator::new(words.iter());
            let first = validator.validate(&code);
            let second = validator.validate(&code);
            prop_assert!(!second);
            if first {
                prop_assert_eq!(validator.evaluate(&code), Outcome::AlreadyExists);
            }
        }
    }
}
