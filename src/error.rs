//! Error values surfaced by sequence construction and access.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, SequenceError>;

#[derive(Debug, Error)]
pub enum SequenceError {
    /// The byte source could not be opened or a read from it failed.
    #[error("source is not readable: {0}")]
    InvalidSource(#[from] std::io::Error),

    /// Indexed access on a sequence with no nodes.
    #[error("index {index} out of range for sequence of length {len}")]
    OutOfRange { index: isize, len: usize },

    /// Node lookup found no chain to walk.
    #[error("null chain: no node reachable from head/tail")]
    NullChain,
}

impl SequenceError {
    /// True for `OutOfRange` and `NullChain`.
    #[must_use]
    pub fn is_access_error(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::NullChain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = SequenceError::OutOfRange { index: -1, len: 0 };
        assert_eq!(
            err.to_string(),
            "index -1 out of range for sequence of length 0"
        );
        assert!(err.is_access_error());
    }

    #[test]
    fn test_io_error_converts_to_invalid_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let err: SequenceError = io.into();
        assert!(matches!(err, SequenceError::InvalidSource(_)));
        assert!(!err.is_access_error());
        assert!(err.to_string().starts_with("source is not readable"));
    }
}
