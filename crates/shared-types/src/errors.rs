//! Codec error types.

use thiserror::Error;

/// Errors produced by the address ↔ field codec.
///
/// Both variants are non-retryable: they indicate a caller bug or corrupted
/// input, never a transient condition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The address string failed checksum, prefix, or length validation.
    #[error("invalid address {address:?}: {reason}")]
    InvalidAddress {
        /// The offending address string
        address: String,
        /// What validation step failed
        reason: String,
    },

    /// The field string or value is malformed or out of range.
    #[error("invalid field element {value:?}: {reason}")]
    InvalidField {
        /// The offending field string or decimal value
        value: String,
        /// What validation step failed
        reason: String,
    },
}
