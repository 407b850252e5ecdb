//! Error types for the Cloacal convenience I/O layer.
//!
//! Parsing and formatting themselves never fail: the parser degrades
//! gracefully by dropping unrecognized lines, and the formatter is total
//! over any [`crate::Record`]. The only fallible operations are the
//! reader/writer/byte-slice helpers in the crate root, which can hit I/O
//! or encoding problems before the text ever reaches the parser.
//!
//! ## Examples
//!
//! ```rust
//! use cloacal::{parse_slice, Error};
//!
//! // Invalid UTF-8 is the one way a byte input can be rejected
//! let result = parse_slice(&[0xff, 0xfe]);
//! assert!(matches!(result, Err(Error::Utf8(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Errors from the convenience I/O helpers.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Input bytes were not valid UTF-8
    #[error("invalid UTF-8: {0}")]
    Utf8(String),
}

impl Error {
    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an encoding error for byte inputs that are not UTF-8.
    pub fn utf8<T: fmt::Display>(msg: T) -> Self {
        Error::Utf8(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
