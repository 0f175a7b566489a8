// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Distracting-word filtering and grouping.
//!
//! [`WordGroups`] is the prepared form of a raw distracting-word list:
//! invalid words dropped, survivors lowercased and deduplicated, then
//! partitioned into groups keyed by a representative. A representative is
//! the shortest word (ties broken lexicographically) that occurs as a
//! subsequence inside every other member of its group.
//!
//! Validation probes only the representatives. Subsequence containment is
//! transitive, so a member can only occur in a code if its representative
//! does, and the representative is itself a banned word. With the word list
//! `["ha", "haha", "hahaha"]`, a single probe for `"ha"` settles all three.
//!
//! Grouping is purely a shortcut: the accept/reject outcome is identical to
//! scanning every filtered word. `contracts::check_grouping_equivalence`
//! asserts exactly that in debug builds.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use serde::Serialize;

use crate::contracts;
use crate::pattern::{is_valid_word, normalize};
use crate::subsequence::contains_subsequence;

/// Filtered, normalized, grouped distracting words.
///
/// Construction is the only mutation; after [`WordGroups::new`] the partition
/// is fixed for the life of the value. Iteration order is deterministic
/// (sorted), so serialized output is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordGroups {
    /// representative -> other members. The representative itself is an
    /// implicit member of its own group.
    groups: BTreeMap<String, BTreeSet<String>>,
}

impl WordGroups {
    /// Build the partition from a raw word list.
    ///
    /// Words failing the pattern check (empty, longer than a code,
    /// non-alphanumeric) are dropped without error; duplicates collapse
    /// after lowercasing. The survivors are sorted by length then
    /// lexicographically, and consumed round by round: the first remaining
    /// word becomes a representative, every remaining word containing it as
    /// a subsequence joins its group, and the rest seed the next round.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut survivors: Vec<String> = words
            .into_iter()
            .filter(|word| is_valid_word(word.as_ref()))
            .map(|word| normalize(word.as_ref()))
            .collect();
        survivors.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        // Equal strings have equal length, so duplicates are adjacent here.
        survivors.dedup();

        let mut groups = BTreeMap::new();
        let mut remaining: VecDeque<String> = survivors.into();
        while let Some(representative) = remaining.pop_front() {
            let mut members = BTreeSet::new();
            remaining.retain(|word| {
                if contains_subsequence(word, &representative) {
                    members.insert(word.clone());
                    false
                } else {
                    true
                }
            });
            groups.insert(representative, members);
        }

        let built = WordGroups { groups };
        contracts::check_representative_is_subsequence(&built);
        built
    }

    /// The group representatives, shortest-first within each length tier.
    ///
    /// These are the only words a validator has to probe.
    pub fn representatives(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// The non-representative members grouped under `representative`.
    pub fn group(&self, representative: &str) -> Option<&BTreeSet<String>> {
        self.groups.get(representative)
    }

    /// Iterate over `(representative, members)` pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.groups
            .iter()
            .map(|(representative, members)| (representative.as_str(), members))
    }

    /// Every retained word: representatives and members alike.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().flat_map(|(representative, members)| {
            std::iter::once(representative.as_str()).chain(members.iter().map(String::as_str))
        })
    }

    /// Whether `word` (already normalized) survived filtering.
    pub fn contains_word(&self, word: &str) -> bool {
        self.groups.contains_key(word)
            || self.groups.values().any(|members| members.contains(word))
    }

    /// Number of groups (= number of representatives).
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of retained words across all groups.
    pub fn word_count(&self) -> usize {
        self.groups.values().map(|members| 1 + members.len()).sum()
    }

    /// True when filtering left nothing to screen against.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
