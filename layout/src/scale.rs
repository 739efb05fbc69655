//! Scaling a condition table onto a larger plate.
//!
//! Each source well is copied onto the corresponding rectangular block of
//! the target plate: scaling 96 to 384 copies A1 onto A1, A2, B1, B2. The
//! target extents must be integer multiples of the source extents.

use crate::{LayoutError, LayoutResult};
use platemap_compiler::{ConditionTable, TableBuilder};
use platemap_core::{PlateShape, Value, Well};

/// Scale `table` onto a `to`-shaped plate by copying values blockwise.
///
/// If the table carries both `row` and `column` coordinate columns (from
/// `include_row_column`), they are recomputed for the target plate rather
/// than copied. Any other column, including one that happens to be named
/// `row` or `column` on its own, is copied as data.
pub fn scale(table: &ConditionTable, to: PlateShape) -> LayoutResult<ConditionTable> {
    scale_inner(table, to, None)
}

/// Like [`scale`], additionally recording each target well's source well
/// name in a new `source_column` column.
pub fn scale_with_source(
    table: &ConditionTable,
    to: PlateShape,
    source_column: &str,
) -> LayoutResult<ConditionTable> {
    scale_inner(table, to, Some(source_column))
}

/// Scale a 96-well table onto a 384-well plate (each well becomes a
/// 2x2 block).
pub fn scale_96_to_384(table: &ConditionTable) -> LayoutResult<ConditionTable> {
    scale(table, PlateShape::new(16, 24))
}

fn scale_inner(
    table: &ConditionTable,
    to: PlateShape,
    source_column: Option<&str>,
) -> LayoutResult<ConditionTable> {
    let from = table.shape();
    let (row_ratio, col_ratio) = block_ratio(from, to)?;

    let columns = table.columns();
    // Coordinate columns are only recomputed when the source carries the
    // full `row`/`column` pair; a lone user condition named `row` is data.
    let recompute_coordinates = ["row", "column"]
        .iter()
        .all(|reserved| columns.iter().any(|c| c == reserved));

    let mut builder = TableBuilder::new(to);
    for (well, cells) in table.rows() {
        for target in block_wells(well, row_ratio, col_ratio) {
            for (name, cell) in columns.iter().zip(cells) {
                match name.as_str() {
                    // Physical coordinates refer to the target plate.
                    "row" if recompute_coordinates => {
                        builder.set(target, name, Value::Int(target.row as i64 - 1))
                    }
                    "column" if recompute_coordinates => {
                        builder.set(target, name, Value::Int(target.col as i64 - 1))
                    }
                    _ => {
                        if let Some(value) = cell {
                            builder.set(target, name, value.clone());
                        } else {
                            // Keep the column present even if this cell is absent.
                            builder.column(name);
                        }
                    }
                }
            }
            if let Some(source) = source_column {
                builder.set(target, source, Value::String(well.name()));
            }
        }
    }
    Ok(builder.build())
}

/// Integer block ratio between two plate shapes.
fn block_ratio(from: PlateShape, to: PlateShape) -> LayoutResult<(usize, usize)> {
    if from.rows == 0
        || from.cols == 0
        || to.rows % from.rows != 0
        || to.cols % from.cols != 0
        || to.rows < from.rows
        || to.cols < from.cols
    {
        return Err(LayoutError::IncompatibleShapes { from, to });
    }
    Ok((to.rows / from.rows, to.cols / from.cols))
}

/// The target-plate block corresponding to one source well.
fn block_wells(well: Well, row_ratio: usize, col_ratio: usize) -> Vec<Well> {
    let top = (well.row - 1) * row_ratio + 1;
    let left = (well.col - 1) * col_ratio + 1;
    (top..top + row_ratio)
        .flat_map(|row| (left..left + col_ratio).map(move |col| Well::new(row, col)))
        .collect()
}
