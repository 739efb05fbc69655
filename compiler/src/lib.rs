//! Platemap Spec Compiler
//!
//! Transform a platemap program (named conditions, each a range expression
//! plus a value spec) into a full-plate condition table.
//!
//! Responsibilities:
//! - Resolve range expressions through the range resolver
//! - Broadcast value specs (scalar, flat, nested, per-region) onto regions
//! - Assemble the full-plate table with absent cells left missing
//! - Convenience compilation for cherrypicked well lists

mod compiler;
mod error;
mod table;

pub use compiler::{cherrypick, cherrypick_with, Platemap};
pub use error::{CompileError, CompileResult};
pub use table::{ConditionTable, TableBuilder};
