//! Compiler error types.

use platemap_parser::ResolveError;
use thiserror::Error;

/// Errors that can occur while compiling a platemap.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The condition's range expression failed to resolve.
    #[error("condition '{condition}': {source}")]
    Range {
        condition: String,
        #[source]
        source: ResolveError,
    },

    /// The condition's value spec does not fit its resolved range.
    #[error("condition '{condition}': shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        condition: String,
        expected: String,
        actual: String,
    },
}

impl CompileError {
    pub fn range(condition: impl Into<String>, source: ResolveError) -> Self {
        Self::Range {
            condition: condition.into(),
            source,
        }
    }

    pub fn shape_mismatch(
        condition: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::ShapeMismatch {
            condition: condition.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Result type for compilation.
pub type CompileResult<T> = Result<T, CompileError>;
