//! Platemap Range Resolver
//!
//! This crate parses well-range expressions into concrete plate coordinates:
//! - Region grammar: `expr := region (',' region)*`,
//!   `region := endpoint (':' endpoint)?`
//! - Well references (`B7`), rectangles (`A1:B2`), row spans (`A:C`) and
//!   column spans (`2:4`)
//! - Error handling with the offending token attached

mod error;
mod resolver;

pub use error::*;
pub use resolver::{resolve, resolve_wells, Region};
