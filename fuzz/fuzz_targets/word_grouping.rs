// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word grouping under adversarial word lists.
//!
//! The grouping layer may only ever be a shortcut. For any word list,
//! however hostile, the partition must cover exactly the filtered words and
//! every member must contain its representative; anything else would let
//! grouping change an accept/reject decision.

#![no_main]

use std::collections::BTreeSet;

use classcode::{contains_subsequence, is_valid_word, WordGroups};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|words: Vec<String>| {
    let groups = WordGroups::new(&words);

    // INVARIANT 1: every member contains its representative as a subsequence.
    for (representative, members) in groups.iter() {
        for member in members {
            assert!(
                contains_subsequence(member, representative),
                "member {:?} does not contain representative {:?}",
                member,
                representative
            );
        }
    }

    // INVARIANT 2: the partition covers exactly the filtered, normalized,
    // deduplicated words.
    let filtered: BTreeSet<String> = words
        .iter()
        .filter(|word| is_valid_word(word))
        .map(|word| word.to_ascii_lowercase())
        .collect();
    assert_eq!(groups.word_count(), filtered.len());
    for word in &filtered {
        assert!(groups.contains_word(word), "word {:?} lost in grouping", word);
    }

    // INVARIANT 3: representatives are themselves retained words.
    for representative in groups.representatives() {
        assert!(filtered.contains(representative));
    }
});
