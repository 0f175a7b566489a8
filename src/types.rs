// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core types shared across the crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed length of a class code, in characters.
///
/// Distracting words are capped at the same length: a word longer than a
/// code can never occur inside it as a subsequence.
pub const CODE_LENGTH: usize = 6;

/// Outcome of validating a single candidate code.
///
/// The boolean [`validate`](crate::CodeValidator::validate) surface collapses
/// every non-`Valid` variant to `false`. The enum exists for diagnostics and
/// reporting; callers that only need accept/reject should stick to the
/// boolean contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    /// Not exactly six ASCII letters or digits.
    InvalidPattern,
    /// Already accepted earlier in the validator's lifetime (any casing).
    AlreadyExists,
    /// A distracting word occurs in the code as a subsequence.
    ContainsDistractingWord,
    /// Accepted and recorded against future reuse.
    Valid,
}

impl Outcome {
    /// True only for the `Valid` outcome.
    pub fn is_valid(self) -> bool {
        matches!(self, Outcome::Valid)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::InvalidPattern => "invalid pattern",
            Outcome::AlreadyExists => "already exists",
            Outcome::ContainsDistractingWord => "contains distracting word",
            Outcome::Valid => "valid",
        };
        write!(f, "{}", label)
    }
}
