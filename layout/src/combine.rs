//! Tiling several small-plate tables onto one larger plate.
//!
//! Typically four 96-well tables combine into one 384-well table. The
//! arrangement is a grid of tables: `[[a, b], [c, d]]` places `a` top-left,
//! `b` top-right, `c` bottom-left, `d` bottom-right. Placement is blockwise
//! by default; interleaving places one row (or column) from each source
//! plate before moving to the next.

use crate::{LayoutError, LayoutResult};
use platemap_compiler::{ConditionTable, TableBuilder};
use platemap_core::{PlateShape, Value, Well};

/// Builder for combining a grid of condition tables into one larger table.
#[derive(Debug, Clone)]
pub struct Combine {
    layout: Vec<Vec<ConditionTable>>,
    interleave_rows: bool,
    interleave_columns: bool,
    source_well: Option<String>,
}

impl Combine {
    /// Arrange `layout` (rows of tables) for combination.
    pub fn new(layout: Vec<Vec<ConditionTable>>) -> Self {
        Self {
            layout,
            interleave_rows: false,
            interleave_columns: false,
            source_well: None,
        }
    }

    /// Interleave one row from each source plate instead of block placement.
    pub fn interleave_rows(mut self) -> Self {
        self.interleave_rows = true;
        self
    }

    /// Interleave one column from each source plate instead of block
    /// placement.
    pub fn interleave_columns(mut self) -> Self {
        self.interleave_columns = true;
        self
    }

    /// Record each well's origin well name in a new column.
    pub fn source_well(mut self, column: impl Into<String>) -> Self {
        self.source_well = Some(column.into());
        self
    }

    /// Combine the arranged tables into one table over the larger plate.
    pub fn combine(self) -> LayoutResult<ConditionTable> {
        let plate_rows = self.layout.len();
        let plate_cols = self.layout.first().map(Vec::len).unwrap_or(0);
        if plate_rows == 0 || plate_cols == 0 {
            return Err(LayoutError::layout_mismatch("empty table arrangement"));
        }
        if self.layout.iter().any(|row| row.len() != plate_cols) {
            return Err(LayoutError::layout_mismatch(
                "ragged table arrangement: every row must hold the same number of tables",
            ));
        }

        let from = self.layout[0][0].shape();
        if self
            .layout
            .iter()
            .flatten()
            .any(|table| table.shape() != from)
        {
            return Err(LayoutError::layout_mismatch(
                "all tables in the arrangement must share one plate shape",
            ));
        }

        let to = PlateShape::new(from.rows * plate_rows, from.cols * plate_cols);
        let mut builder = TableBuilder::new(to);

        for (i, plate_row) in self.layout.iter().enumerate() {
            for (j, table) in plate_row.iter().enumerate() {
                for (well, cells) in table.rows() {
                    let row0 = well.row - 1;
                    let col0 = well.col - 1;
                    let target_row = if self.interleave_rows {
                        plate_rows * row0 + i
                    } else {
                        row0 + from.rows * i
                    };
                    let target_col = if self.interleave_columns {
                        plate_cols * col0 + j
                    } else {
                        col0 + from.cols * j
                    };
                    let target = Well::new(target_row + 1, target_col + 1);

                    for (name, cell) in table.columns().iter().zip(cells) {
                        if let Some(value) = cell {
                            builder.set(target, name, value.clone());
                        } else {
                            builder.column(name);
                        }
                    }
                    if let Some(ref source) = self.source_well {
                        builder.set(target, source, Value::String(well.name()));
                    }
                }
            }
        }
        Ok(builder.build())
    }
}
