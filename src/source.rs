//! Stream Construction
//!
//! Builds a [`CharSequence`] from any byte source, one byte at a time, with
//! every line break swapped for a caller-chosen replacement byte.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::cadena::{CharSequence, SENTINEL};
use crate::error::Result;

/// Replacement used by the `*_default` constructors.
///
/// Equal to [`SENTINEL`], so line breaks are dropped rather than stored.
pub const DEFAULT_NEWLINE_REPLACEMENT: u8 = SENTINEL;

const LINE_BREAK: u8 = b'\n';

impl CharSequence {
    /// Read `reader` to exhaustion, appending each byte.
    ///
    /// `\n` is appended as `replacement`; other bytes go in as-is. Appends
    /// follow [`CharSequence::append_byte`], so NUL bytes are absorbed.
    ///
    /// # Errors
    /// `InvalidSource` when a read fails.
    pub fn from_reader<R: Read>(reader: R, replacement: u8) -> Result<Self> {
        let mut seq = Self::new();
        let mut bytes_read = 0usize;
        let mut line_breaks = 0usize;

        for byte in BufReader::new(reader).bytes() {
            let byte = byte.map_err(|err| {
                warn!(bytes_read, error = %err, "read from source failed");
                err
            })?;
            bytes_read += 1;

            if byte == LINE_BREAK {
                line_breaks += 1;
                seq.append_byte(replacement);
            } else {
                seq.append_byte(byte);
            }
        }

        debug!(
            bytes_read,
            line_breaks,
            len = seq.len(),
            "built sequence from reader"
        );
        Ok(seq)
    }

    /// [`CharSequence::from_reader`] with [`DEFAULT_NEWLINE_REPLACEMENT`].
    pub fn from_reader_default<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader(reader, DEFAULT_NEWLINE_REPLACEMENT)
    }

    /// Open `path` and read it with [`CharSequence::from_reader`].
    ///
    /// # Errors
    /// `InvalidSource` when the file cannot be opened or read.
    pub fn from_path(path: impl AsRef<Path>, replacement: u8) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            warn!(path = %path.display(), error = %err, "cannot open source");
            err
        })?;
        Self::from_reader(file, replacement)
    }

    /// [`CharSequence::from_path`] with [`DEFAULT_NEWLINE_REPLACEMENT`].
    pub fn from_path_default(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_path(path, DEFAULT_NEWLINE_REPLACEMENT)
    }
}
