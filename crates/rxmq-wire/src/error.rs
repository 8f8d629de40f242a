//! Error types for binary layout parsing.

use thiserror::Error;

/// Errors raised while reading MQ structures from a byte buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WireError {
    /// A read would run past the end of the buffer.
    #[error("need {needed} bytes at offset {offset}, only {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A declared structure length is smaller than the fixed part it must hold.
    #[error("structure at offset {offset} declares length {length}, minimum is {minimum}")]
    LengthTooSmall {
        offset: usize,
        length: i32,
        minimum: usize,
    },

    /// A declared length or count is negative.
    #[error("negative {field} {value} at offset {offset}")]
    Negative {
        field: &'static str,
        value: i32,
        offset: usize,
    },

    /// The structure identifier does not match the layout being parsed.
    #[error("expected structure id '{expected}', found '{found}'")]
    StrucId {
        expected: &'static str,
        found: String,
    },
}

/// Result type for wire operations.
pub type Result<T> = std::result::Result<T, WireError>;

/// Create a [`WireError::StrucId`] from the raw identifier bytes.
pub fn struc_id_mismatch(expected: &'static str, found: &[u8]) -> WireError {
    WireError::StrucId {
        expected,
        found: String::from_utf8_lossy(found).into_owned(),
    }
}
