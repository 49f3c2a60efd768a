//! KMP Substring Search
//!
//! **Core Algorithm**: Knuth-Morris-Pratt
//! - Precompute the failure table once per pattern (O(M))
//! - Walk the text once, never stepping back (O(N) amortized)
//! - After a full match resume at `pi[M - 1]`, so overlapping matches count
//!
//! Each text byte costs at most one successful comparison, and every failed
//! comparison shrinks the matched prefix, so a scan performs at most `2N`
//! comparisons regardless of the pattern.

extern crate alloc;
use alloc::vec::Vec;

use tracing::trace;

use crate::cadena::CharSequence;
use crate::failure::build_failure_table;

/// Outcome of a full scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanReport {
    /// Occurrences found, overlaps included.
    pub matches: usize,
    /// Byte comparisons performed against the pattern.
    pub comparisons: usize,
}

/// Literal pattern with its precomputed failure table.
///
/// Build once, scan any number of texts.
#[derive(Debug, Clone)]
pub struct PatternMatcher<'p> {
    pattern: &'p [u8],
    pi: Vec<usize>,
}

impl<'p> PatternMatcher<'p> {
    pub fn new(pattern: &'p [u8]) -> Self {
        Self {
            pattern,
            pi: build_failure_table(pattern),
        }
    }

    #[inline]
    pub fn pattern(&self) -> &'p [u8] {
        self.pattern
    }

    #[inline]
    pub fn failure_table(&self) -> &[usize] {
        &self.pi
    }

    /// Lazy iterator over match start positions.
    pub fn matches<I>(&self, text: I) -> Matches<'_, I::IntoIter>
    where
        I: IntoIterator<Item = u8>,
    {
        Matches {
            pattern: self.pattern,
            pi: &self.pi,
            text: text.into_iter(),
            j: 0,
            pos: 0,
            comparisons: 0,
        }
    }

    /// Scan `text` to the end, counting matches and comparisons.
    pub fn scan<I>(&self, text: I) -> ScanReport
    where
        I: IntoIterator<Item = u8>,
    {
        let mut iter = self.matches(text);
        let matches = iter.by_ref().count();
        let report = ScanReport {
            matches,
            comparisons: iter.comparisons(),
        };
        trace!(
            pattern_len = self.pattern.len(),
            matches = report.matches,
            comparisons = report.comparisons,
            "kmp scan finished"
        );
        report
    }

    #[inline]
    pub fn count<I>(&self, text: I) -> usize
    where
        I: IntoIterator<Item = u8>,
    {
        self.scan(text).matches
    }
}

/// Iterator yielding the start offset of every (overlapping) match.
///
/// **Zero Allocation**: state is the pattern cursor and a text offset.
#[derive(Debug, Clone)]
pub struct Matches<'m, I> {
    pattern: &'m [u8],
    pi: &'m [usize],
    text: I,
    /// Pattern bytes currently matched.
    j: usize,
    /// Text bytes consumed so far.
    pos: usize,
    comparisons: usize,
}

impl<'m, I> Matches<'m, I> {
    /// Comparisons performed so far.
    #[inline]
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }
}

impl<'m, I: Iterator<Item = u8>> Iterator for Matches<'m, I> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let m = self.pattern.len();
        if m == 0 {
            return None;
        }

        for byte in self.text.by_ref() {
            self.pos += 1;
            // Retry the same text byte against shorter borders until it
            // matches or the cursor is back at 0.
            loop {
                self.comparisons += 1;
                if byte == self.pattern[self.j] {
                    self.j += 1;
                    if self.j == m {
                        self.j = self.pi[m - 1];
                        return Some(self.pos - m);
                    }
                    break;
                } else if self.j == 0 {
                    break;
                } else {
                    self.j = self.pi[self.j - 1];
                }
            }
        }
        None
    }
}

impl CharSequence {
    /// Count occurrences of `pattern`, overlaps included.
    ///
    /// An empty pattern, or one longer than the sequence, matches zero times.
    ///
    /// # Example
    /// ```
    /// use cadena::CharSequence;
    ///
    /// let seq = CharSequence::from("aaaaa");
    /// assert_eq!(seq.search("aa"), 4);
    /// ```
    pub fn search(&self, pattern: impl AsRef<[u8]>) -> usize {
        let pattern = pattern.as_ref();
        if !self.can_match(pattern) {
            return 0;
        }
        PatternMatcher::new(pattern).count(self)
    }

    /// Count occurrences of a single byte.
    pub fn search_byte(&self, byte: u8) -> usize {
        self.search([byte])
    }

    /// True if `pattern` occurs at least once. Stops at the first match.
    pub fn contains(&self, pattern: impl AsRef<[u8]>) -> bool {
        let pattern = pattern.as_ref();
        if !self.can_match(pattern) {
            return false;
        }
        PatternMatcher::new(pattern).matches(self).next().is_some()
    }

    /// Start offsets of every occurrence, ascending.
    pub fn locate(&self, pattern: impl AsRef<[u8]>) -> Vec<usize> {
        let pattern = pattern.as_ref();
        if !self.can_match(pattern) {
            return Vec::new();
        }
        PatternMatcher::new(pattern).matches(self).collect()
    }

    #[inline]
    fn can_match(&self, pattern: &[u8]) -> bool {
        !pattern.is_empty() && pattern.len() <= self.len()
    }
}
