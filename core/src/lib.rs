//! Platemap Core Types
//!
//! This crate provides the foundational types used throughout the platemap
//! system:
//! - Well coordinates and the base-26 letter codec (`Well`, `Traversal`)
//! - Plate geometry (`PlateShape`, the standard plate registry, shape inference)
//! - Condition values and broadcast shapes (`Value`, `ValueSpec`)
//! - Common error types

mod error;
mod shape;
mod value;
mod well;

pub use error::*;
pub use shape::*;
pub use value::*;
pub use well::*;
