//! Common error types for platemap.

use thiserror::Error;

/// Errors that can occur when parsing or bounds-checking a well reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WellError {
    /// The token is not a well reference (letters then digits).
    #[error("invalid well reference '{token}': expected row letters followed by a column number")]
    Malformed { token: String },

    /// The referenced well lies outside the plate.
    #[error("well reference '{token}' is outside the {rows}x{cols} plate")]
    OutOfBounds {
        token: String,
        rows: usize,
        cols: usize,
    },
}

/// Result type for well operations.
pub type WellResult<T> = Result<T, WellError>;
