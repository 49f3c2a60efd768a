//! # Cadena
//!
//! **Doubly-linked byte string with KMP substring counting**
//!
//! > "A string is a chain. Searching it means walking it once."
//!
//! ## Architecture
//!
//! - **Arena-backed chain**: nodes in one `Vec`, linked by index both ways
//! - **Head/tail-relative access**: lookups walk from the closer end
//! - **KMP scan**: failure table once per pattern, single pass over the text
//!
//! ## Performance
//!
//! | Operation | Time | Space |
//! |-----------|------|-------|
//! | Append / Prepend | **O(K)** | O(K) |
//! | Insert at i | O(min(i, N - i) + K) | O(K) |
//! | Get at i | O(min(i, N - i)) | O(1) |
//! | Count | **O(N + M)** | O(M) |
//! | Contains | O(N + M) | O(M) |
//!
//! ## Example
//!
//! ```
//! use cadena::CharSequence;
//!
//! let mut seq = CharSequence::from("abcabc");
//! seq.append("abc");
//! seq.insert("--", -1);
//!
//! assert_eq!(seq.render(), "abcabcabc--");
//! assert_eq!(seq.len(), 11);
//!
//! // Overlapping matches are counted.
//! assert_eq!(seq.search("abc"), 3);
//! assert_eq!(CharSequence::from("aaaaa").search("aa"), 4);
//!
//! assert!(seq.contains("cab"));
//! assert_eq!(seq.locate("abc"), vec![0, 3, 6]);
//! ```

pub mod cadena;
pub mod error;
pub mod failure;
pub mod node;
pub mod search;
pub mod source;

pub use cadena::{CharSequence, Iter, SENTINEL};
pub use error::{Result, SequenceError};
pub use failure::build_failure_table;
pub use node::{Node, NodeId};
pub use search::{Matches, PatternMatcher, ScanReport};
pub use source::DEFAULT_NEWLINE_REPLACEMENT;

/// Version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_search() {
        let seq = CharSequence::from("abracadabra");

        assert_eq!(seq.search("abra"), 2);
        assert_eq!(seq.search("bra"), 2);
        assert_eq!(seq.search("a"), 5);
        assert_eq!(seq.search("xyz"), 0);
    }

    #[test]
    fn test_locate() {
        let seq = CharSequence::from("abracadabra");
        assert_eq!(seq.locate("abra"), vec![0, 7]);
    }

    #[test]
    fn test_empty_pattern() {
        let seq = CharSequence::from("hello");
        assert_eq!(seq.search(""), 0);
    }

    #[test]
    fn test_full_text_match() {
        let seq = CharSequence::from("exactmatch");
        assert_eq!(seq.search("exactmatch"), 1);
        assert!(seq.contains("exactmatch"));
    }

    #[test]
    fn test_stream_to_count() {
        let seq = CharSequence::from_reader(std::io::Cursor::new("ab\ncd\nab"), b' ').unwrap();
        assert_eq!(seq.render(), "ab cd ab");
        assert_eq!(seq.len(), 8);
        assert_eq!(seq.search("ab"), 2);
        assert_eq!(seq.search_byte(b' '), 2);
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
