//! KMP Failure Table
//!
//! `pi[i]` is the length of the longest proper prefix of `pattern[..=i]` that
//! is also a suffix of it. On a mismatch after `j` matched bytes the scan
//! resumes at `pi[j - 1]` instead of re-reading text.

extern crate alloc;
use alloc::vec::Vec;

/// Build the failure table for `pattern`. O(M) time and space.
///
/// An empty pattern yields an empty table.
pub fn build_failure_table(pattern: &[u8]) -> Vec<usize> {
    let mut pi = vec![0usize; pattern.len()];

    // Length of the current candidate prefix.
    let mut len = 0;
    let mut i = 1;
    while i < pattern.len() {
        if pattern[i] == pattern[len] {
            len += 1;
            pi[i] = len;
            i += 1;
        } else if len != 0 {
            len = pi[len - 1];
        } else {
            i += 1;
        }
    }

    pi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single() {
        assert!(build_failure_table(b"").is_empty());
        assert_eq!(build_failure_table(b"a"), vec![0]);
    }

    #[test]
    fn test_known_tables() {
        assert_eq!(build_failure_table(b"aabaab"), vec![0, 1, 0, 1, 2, 3]);
        assert_eq!(build_failure_table(b"abcabd"), vec![0, 0, 0, 1, 2, 0]);
        assert_eq!(build_failure_table(b"aaaa"), vec![0, 1, 2, 3]);
        assert_eq!(build_failure_table(b"abab"), vec![0, 0, 1, 2]);
        assert_eq!(
            build_failure_table(b"aabaaab"),
            vec![0, 1, 0, 1, 2, 2, 3]
        );
    }

    #[test]
    fn test_entries_are_proper_borders() {
        let pattern = b"abacabadabacaba";
        let pi = build_failure_table(pattern);

        for (i, &k) in pi.iter().enumerate() {
            assert!(k <= i, "pi[{}] = {} is not proper", i, k);
            let prefix = &pattern[..=i];
            assert_eq!(&prefix[..k], &prefix[prefix.len() - k..]);
            // Nothing longer is a border.
            for longer in (k + 1)..prefix.len() {
                assert_ne!(&prefix[..longer], &prefix[prefix.len() - longer..]);
            }
        }
    }
}
