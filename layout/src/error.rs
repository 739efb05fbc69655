//! Layout error types.

use platemap_core::PlateShape;
use thiserror::Error;

/// Errors that can occur during plate layout operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The target plate's extents are not integer multiples of the source's.
    #[error("cannot map a {from} plate onto a {to} plate: extents must be integer multiples")]
    IncompatibleShapes { from: PlateShape, to: PlateShape },

    /// The arrangement of input tables does not tile the target plate.
    #[error("layout mismatch: {reason}")]
    LayoutMismatch { reason: String },

    /// The named condition does not exist in the table.
    #[error("unknown condition column '{name}'")]
    UnknownColumn { name: String },
}

impl LayoutError {
    pub fn layout_mismatch(reason: impl Into<String>) -> Self {
        Self::LayoutMismatch {
            reason: reason.into(),
        }
    }
}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
