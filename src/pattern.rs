//! Pattern checks and normalization for codes and words.
//!
//! Codes and distracting words share one alphabet: ASCII letters and digits.
//! A code is exactly [`CODE_LENGTH`] characters, a word is 1 to
//! [`CODE_LENGTH`] characters. The checks are byte scans rather than a
//! compiled regex; the class is fixed-width ASCII and a scan says exactly
//! what `^[A-Za-z0-9]{6}$` says.

use crate::types::CODE_LENGTH;

/// Check a candidate code against `^[A-Za-z0-9]{6}$`.
///
/// Whitespace is never trimmed: `"AAA12 "` and `"      "` both fail. Empty
/// input fails on length. Byte length equals character count here because
/// every accepted byte is ASCII.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Check a distracting word: 1 to [`CODE_LENGTH`] ASCII letters or digits.
///
/// Words failing this impose no restriction on any code and are silently
/// dropped by the callers that consume word lists.
pub fn is_valid_word(word: &str) -> bool {
    !word.is_empty()
        && word.len() <= CODE_LENGTH
        && word.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Normalize for case-insensitive identity: ASCII lowercase.
///
/// The valid alphabet is ASCII, so ASCII lowercasing is the whole story.
/// Unicode-aware lowercasing would let exotic inputs (U+212A KELVIN SIGN)
/// normalize into the valid alphabet, which the pattern check forbids.
pub fn normalize(value: &str) -> String {
    value.to_ascii_lowercase()
}
