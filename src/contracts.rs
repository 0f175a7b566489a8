//! Debug-mode contracts for the word-grouping layer.
//!
//! Grouping exists only as a shortcut; if it ever changes an accept/reject
//! decision, it is wrong. These checks pin the properties that make the
//! shortcut sound. They:
//!
//! 1. Are **zero-cost in release builds** (compiled out entirely)
//! 2. Provide **early failure detection** during development
//! 3. Are exercised directly by the property tests in `tests/property.rs`
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function                     | Property                                |
//! |---------------------------------------|-----------------------------------------|
//! | `check_representative_is_subsequence` | rep is a subsequence of every member    |
//! | `check_grouping_equivalence`          | rep probe == flat scan, for any code    |

use crate::subsequence::contains_subsequence;
use crate::wordlist::WordGroups;

/// Check that every group member contains its representative as a
/// subsequence.
///
/// This is what licenses probing representatives only: if the
/// representative is absent from a code, transitivity rules out every
/// member too.
///
/// # Panics (debug builds only)
/// Panics if any member does not contain its representative.
#[inline]
pub fn check_representative_is_subsequence(groups: &WordGroups) {
    if !cfg!(debug_assertions) {
        return;
    }
    for (representative, members) in groups.iter() {
        for member in members {
            assert!(
                contains_subsequence(member, representative),
                "Contract violation: representative '{}' is not a subsequence of member '{}'",
                representative,
                member
            );
        }
    }
}

/// Check that probing representatives decides exactly what a flat scan of
/// every retained word would decide for `code`.
///
/// # Panics (debug builds only)
/// Panics if the grouped probe and the flat scan disagree.
#[inline]
pub fn check_grouping_equivalence(groups: &WordGroups, code: &str) {
    if !cfg!(debug_assertions) {
        return;
    }
    let via_representatives = groups
        .representatives()
        .any(|representative| contains_subsequence(code, representative));
    let via_flat_scan = groups.words().any(|word| contains_subsequence(code, word));
    assert_eq!(
        via_representatives, via_flat_scan,
        "Contract violation: grouped probe ({}) != flat scan ({}) for code '{}'",
        via_representatives, via_flat_scan, code
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contracts_hold_for_nested_words() {
        let groups = WordGroups::new(["ha", "haha", "hahaha", "rats", "darn", "darnit"]);
        check_representative_is_subsequence(&groups);
        for code in ["hahaha", "rats42", "abcdef", "d2ar4n", ""] {
            check_grouping_equivalence(&groups, code);
        }
    }
}
