//! Reshaping one condition into the plate's physical grid.

use crate::{LayoutError, LayoutResult};
use platemap_compiler::ConditionTable;
use platemap_core::Value;

/// Reshape one condition's column into a rows x columns grid matching the
/// plate's physical layout. Absent cells stay `None`.
pub fn pivot(table: &ConditionTable, condition: &str) -> LayoutResult<Vec<Vec<Option<Value>>>> {
    let col = table
        .columns()
        .iter()
        .position(|c| c == condition)
        .ok_or_else(|| LayoutError::UnknownColumn {
            name: condition.to_string(),
        })?;

    let shape = table.shape();
    let mut grid = vec![vec![None; shape.cols]; shape.rows];
    for (well, cells) in table.rows() {
        grid[well.row - 1][well.col - 1] = cells[col].clone();
    }
    Ok(grid)
}
