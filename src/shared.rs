// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Process-wide validator handle.
//!
//! A validator shared across threads must keep check-and-insert atomic: two
//! concurrent validations of the same fresh code must not both observe "not
//! yet existing" and both accept. One mutex around the whole transition is
//! sufficient; every operation completes in bounded sub-millisecond time,
//! so there is nothing to gain from finer-grained locking.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::types::Outcome;
use crate::validator::CodeValidator;

/// Cloneable handle to one shared [`CodeValidator`].
///
/// Clones refer to the same underlying registry: a code accepted through
/// one handle is rejected through every other.
#[derive(Debug, Clone, Default)]
pub struct SharedValidator {
    inner: Arc<Mutex<CodeValidator>>,
}

impl SharedValidator {
    /// Create a shared validator screening against `distracting_words`.
    pub fn new<I, S>(distracting_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        SharedValidator::from_validator(CodeValidator::new(distracting_words))
    }

    /// Wrap an already-configured validator (e.g. one pre-seeded with
    /// persisted codes).
    pub fn from_validator(validator: CodeValidator) -> Self {
        SharedValidator {
            inner: Arc::new(Mutex::new(validator)),
        }
    }

    /// Validate a candidate code; check and insert happen under one lock.
    pub fn validate(&self, code: &str) -> bool {
        self.inner.lock().validate(code)
    }

    /// Validate and report which gate decided.
    pub fn evaluate(&self, code: &str) -> Outcome {
        self.inner.lock().evaluate(code)
    }

    /// Clear accepted codes and cached rejections across all handles.
    pub fn reset(&self) {
        self.inner.lock().reset()
    }

    /// Number of codes accepted so far.
    pub fn accepted_count(&self) -> usize {
        self.inner.lock().accepted_count()
    }
}
