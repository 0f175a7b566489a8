// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Accept/reject state machine for class codes.
//!
//! Two shapes, one rule set:
//!
//! - [`CodeValidator`] owns its state: the word groups it screens against,
//!   the codes it has accepted, and a cache of rejections it has already
//!   handed out. One instance per registry; no ambient global.
//! - [`validate_code`] is the stateless shape: the caller supplies the full
//!   existing-code history on every call and nothing is recorded.
//!
//! A candidate passes through the same gates in both shapes: pattern, prior
//! use, distracting-word containment. The first gate that trips decides the
//! outcome; only a candidate that clears all three is accepted.

use std::collections::{HashMap, HashSet};

use crate::contracts;
use crate::pattern::{is_valid_code, is_valid_word, normalize};
use crate::subsequence::contains_subsequence;
use crate::types::Outcome;
use crate::wordlist::WordGroups;

/// Stateful class-code validator.
///
/// Accepted codes accumulate for the lifetime of the instance, so a code is
/// accepted at most once regardless of casing. Rejections are cached by the
/// exact normalized input string, making repeated validation of the same
/// malformed or duplicate input O(1) after the first call. The first-seen
/// outcome for a given normalized string is sticky until [`reset`].
///
/// [`reset`]: CodeValidator::reset
#[derive(Debug, Clone, Default)]
pub struct CodeValidator {
    groups: WordGroups,
    existing: HashSet<String>,
    rejections: HashMap<String, Outcome>,
}

impl CodeValidator {
    /// Create a validator screening against `distracting_words`.
    ///
    /// Invalid words (empty, longer than a code, non-alphanumeric) are
    /// silently dropped; they impose no restriction on any code.
    pub fn new<I, S>(distracting_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        CodeValidator {
            groups: WordGroups::new(distracting_words),
            existing: HashSet::new(),
            rejections: HashMap::new(),
        }
    }

    /// Create a validator pre-seeded with already-accepted codes.
    ///
    /// This is the boundary for callers that persist accepted codes across
    /// process restarts: whatever was accepted before is supplied here and
    /// rejected on resubmission, same as a code accepted in this lifetime.
    pub fn with_existing_codes<I, S, J, T>(distracting_words: I, existing_codes: J) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        J: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut validator = CodeValidator::new(distracting_words);
        validator.existing = existing_codes
            .into_iter()
            .map(|code| normalize(code.as_ref()))
            .collect();
        validator
    }

    /// Validate a candidate code; `true` means accepted and recorded.
    ///
    /// This is the primary contract. Every rejection category collapses to
    /// `false`; use [`evaluate`](CodeValidator::evaluate) when the reason
    /// matters.
    pub fn validate(&mut self, code: &str) -> bool {
        self.evaluate(code).is_valid()
    }

    /// Validate a candidate code and report which gate decided.
    pub fn evaluate(&mut self, code: &str) -> Outcome {
        let normalized = normalize(code);
        if let Some(&outcome) = self.rejections.get(&normalized) {
            return outcome;
        }

        let outcome = self.classify(&normalized);
        if outcome.is_valid() {
            self.existing.insert(normalized);
        } else {
            self.rejections.insert(normalized, outcome);
        }
        outcome
    }

    /// Run the three gates in order. Pure with respect to `self`.
    fn classify(&self, normalized: &str) -> Outcome {
        if !is_valid_code(normalized) {
            return Outcome::InvalidPattern;
        }
        if self.existing.contains(normalized) {
            return Outcome::AlreadyExists;
        }
        contracts::check_grouping_equivalence(&self.groups, normalized);
        if self
            .groups
            .representatives()
            .any(|representative| contains_subsequence(normalized, representative))
        {
            return Outcome::ContainsDistractingWord;
        }
        Outcome::Valid
    }

    /// Clear accepted codes and cached rejections.
    ///
    /// The word groups survive; they were fixed at construction. Intended
    /// for test isolation and process-restart semantics.
    pub fn reset(&mut self) {
        self.existing.clear();
        self.rejections.clear();
    }

    /// Number of codes accepted so far (seeded codes included).
    pub fn accepted_count(&self) -> usize {
        self.existing.len()
    }

    /// The word partition this validator screens against.
    pub fn word_groups(&self) -> &WordGroups {
        &self.groups
    }
}

/// Stateless validation: the pure-function shape of the same rule set.
///
/// The caller supplies the full existing-code history; nothing is recorded
/// and there is no rejection cache. Distracting words are taken as-is with
/// no pre-validation required: invalid words are skipped, including words
/// longer than the code, which are skipped explicitly rather than left to
/// the subsequence scan to fail.
///
/// For any fresh [`CodeValidator`] over the same word list, this function
/// and [`CodeValidator::validate`] agree on every input.
pub fn validate_code<S, T>(code: &str, distracting_words: &[S], existing_codes: &[T]) -> bool
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    if !is_valid_code(code) {
        return false;
    }

    let normalized = normalize(code);
    if existing_codes
        .iter()
        .any(|existing| normalize(existing.as_ref()) == normalized)
    {
        return false;
    }

    for word in distracting_words {
        let word = word.as_ref();
        // Invalid words impose no restriction; this also covers words
        // longer than the code.
        if !is_valid_word(word) {
            continue;
        }
        if contains_subsequence(&normalized, &normalize(word)) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gates_fire_in_order() {
        let mut validator = CodeValidator::new(["rats"]);
        assert_eq!(validator.evaluate("bad"), Outcome::InvalidPattern);
        assert_eq!(validator.evaluate("RATS42"), Outcome::ContainsDistractingWord);
        assert_eq!(validator.evaluate("AAA123"), Outcome::Valid);
        assert_eq!(validator.evaluate("aaa123"), Outcome::AlreadyExists);
    }

    #[test]
    fn first_seen_outcome_is_sticky() {
        let mut validator = CodeValidator::new(["rats"]);
        assert_eq!(validator.evaluate("RATS42"), Outcome::ContainsDistractingWord);
        // Cache answers with the same outcome, not a recomputation.
        assert_eq!(validator.evaluate("rats42"), Outcome::ContainsDistractingWord);
    }

    #[test]
    fn cache_is_per_exact_normalized_string() {
        let mut validator = CodeValidator::new(Vec::<String>::new());
        assert!(!validator.validate("aaa1"));
        // A different string with the same defect is classified afresh.
        assert!(!validator.validate("bbb1"));
        assert!(validator.validate("aaa111"));
    }

    #[test]
    fn seeded_codes_are_rejected_on_resubmission() {
        let mut validator =
            CodeValidator::with_existing_codes(Vec::<String>::new(), ["AAA123", "zzz999"]);
        assert_eq!(validator.accepted_count(), 2);
        assert_eq!(validator.evaluate("aAa123"), Outcome::AlreadyExists);
        assert_eq!(validator.evaluate("ZZZ999"), Outcome::AlreadyExists);
        assert!(validator.validate("BBB456"));
    }

    #[test]
    fn reset_clears_codes_but_keeps_words() {
        let mut validator = CodeValidator::new(["rats"]);
        assert!(validator.validate("AAA123"));
        assert!(!validator.validate("AAA123"));
        validator.reset();
        assert!(validator.validate("AAA123"));
        // Word screening still applies after reset.
        assert!(!validator.validate("RATS42"));
    }

    #[test]
    fn pure_shape_checks_existing_case_insensitively() {
        assert!(!validate_code("AAA123", &[] as &[&str], &["aAa123"]));
        assert!(!validate_code("123aAa", &[] as &[&str], &["foobar", "123A", "123aaA"]));
        assert!(validate_code("AAA123", &[] as &[&str], &["foobar"]));
    }

    #[test]
    fn pure_shape_skips_invalid_words() {
        let words = ["", "   ", "+-.", "abCdEfG", "ABcDeFgH"];
        assert!(validate_code("ABCDEF", &words, &[] as &[&str]));
    }

    #[test]
    fn pure_shape_screens_valid_words() {
        assert!(!validate_code("RATS42", &["rats"], &[] as &[&str]));
        assert!(!validate_code("3RQATS", &["darn", "rats"], &[] as &[&str]));
        assert!(validate_code("RAT123", &["rats"], &[] as &[&str]));
    }
}
