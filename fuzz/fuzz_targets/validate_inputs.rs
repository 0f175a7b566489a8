// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Validation under adversarial input.
//!
//! Codes arrive from end users, so the worst case for any input must be a
//! `false`, never a panic. This target hammers both validator shapes with
//! arbitrary UTF-8: embedded NULs, multi-byte characters that lowercase
//! into different lengths, words longer than any code, the lot.

#![no_main]

use classcode::{validate_code, CodeValidator};
use libfuzzer_sys::fuzz_target;

/// Every input produces a defined boolean, and the two shapes agree.
fuzz_target!(|input: (String, Vec<String>)| {
    let (code, words) = input;

    // The pure shape must be total: any input, defined boolean, no panic.
    let stateless = validate_code(&code, &words, &[] as &[&str]);

    // The stateful shape must agree on first submission.
    let mut validator = CodeValidator::new(words.iter().map(String::as_str));
    let first = validator.validate(&code);
    assert_eq!(
        stateless, first,
        "shapes disagree on code {:?} with words {:?}",
        code, words
    );

    // INVARIANT: resubmission is never accepted, whatever happened first.
    // Accepted codes hit the existing set; rejected ones hit the cache.
    assert!(!validator.validate(&code));
});
