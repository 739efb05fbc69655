//! Platemap Layout Operations
//!
//! Geometric reshaping of compiled condition tables:
//! - Scale a table onto a larger plate by copying each well to a block
//!   (`scale`, `scale_96_to_384`)
//! - Tile several small-plate tables onto one larger plate (`Combine`)
//! - Reshape one condition into a physical rows x columns grid (`pivot`)

mod combine;
mod error;
mod pivot;
mod scale;

pub use combine::Combine;
pub use error::{LayoutError, LayoutResult};
pub use pivot::pivot;
pub use scale::{scale, scale_96_to_384, scale_with_source};
