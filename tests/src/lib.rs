//! Shared helpers for the platemap integration tests.

use platemap_compiler::ConditionTable;
use platemap_core::Value;

pub mod prelude {
    pub use crate::{cell, cell_int, cell_str, filled_wells};
    pub use platemap_compiler::{cherrypick, cherrypick_with, ConditionTable, Platemap};
    pub use platemap_core::{PlateShape, Traversal, Value, ValueSpec, Well};
    pub use platemap_layout::{pivot, scale, scale_96_to_384, Combine};
    pub use platemap_parser::{resolve, resolve_wells};
}

/// Look up one cell by well name.
pub fn cell<'t>(table: &'t ConditionTable, well: &str, condition: &str) -> Option<&'t Value> {
    table.get_by_name(well, condition)
}

/// Look up one cell as a string.
pub fn cell_str<'t>(table: &'t ConditionTable, well: &str, condition: &str) -> Option<&'t str> {
    cell(table, well, condition).and_then(Value::as_str)
}

/// Look up one cell as an integer.
pub fn cell_int(table: &ConditionTable, well: &str, condition: &str) -> Option<i64> {
    cell(table, well, condition).and_then(Value::as_int)
}

/// Names of the wells that have at least one condition present.
pub fn filled_wells(table: &ConditionTable) -> Vec<String> {
    table
        .rows()
        .filter(|(_, cells)| cells.iter().any(Option::is_some))
        .map(|(well, _)| well.name())
        .collect()
}
