//! Range resolver error types.

use platemap_core::WellError;
use thiserror::Error;

/// Errors that can occur while resolving a well-range expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A region token does not parse as a single well or a two-endpoint range.
    #[error("malformed range token '{token}': expected a well ('A1'), a rectangle ('A1:B2'), a row span ('A:C'), or a column span ('2:4')")]
    MalformedRange { token: String },

    /// A well token's letter or digit component is missing, malformed, or
    /// out of the plate's bounds.
    #[error("invalid well reference: {0}")]
    InvalidWellReference(#[from] WellError),
}

impl ResolveError {
    pub fn malformed_range(token: impl Into<String>) -> Self {
        Self::MalformedRange {
            token: token.into(),
        }
    }
}

/// Result type for range resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;
