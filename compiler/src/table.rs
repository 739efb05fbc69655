//! The compiled condition table and its builder.

use platemap_core::{PlateShape, Value, Well};
use std::fmt;
use std::str::FromStr;

/// Builder for constructing an immutable [`ConditionTable`].
///
/// Accumulates per-well assignments, then `build()`s the finished table.
/// Columns are created in first-seen order; unassigned cells stay absent.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    shape: PlateShape,
    columns: Vec<String>,
    /// Cell storage, row-major by well, one slot per column.
    cells: Vec<Vec<Option<Value>>>,
}

impl TableBuilder {
    /// Create a builder covering every well of `shape`.
    pub fn new(shape: PlateShape) -> Self {
        Self {
            shape,
            columns: Vec::new(),
            cells: vec![Vec::new(); shape.wells()],
        }
    }

    /// Ensure a column exists, returning its index.
    pub fn column(&mut self, name: &str) -> usize {
        if let Some(idx) = self.columns.iter().position(|c| c == name) {
            return idx;
        }
        self.columns.push(name.to_string());
        for row in &mut self.cells {
            row.push(None);
        }
        self.columns.len() - 1
    }

    /// Assign a value to one cell, overwriting any earlier assignment.
    ///
    /// Wells outside the plate are ignored; the resolver bounds-checks every
    /// reference before assignments are made.
    pub fn set(&mut self, well: Well, column: &str, value: Value) {
        let col = self.column(column);
        if let Some(idx) = self.shape.index_of(well) {
            self.cells[idx][col] = Some(value);
        }
    }

    /// Finish building, producing the immutable table.
    pub fn build(self) -> ConditionTable {
        ConditionTable {
            shape: self.shape,
            columns: self.columns,
            cells: self.cells,
        }
    }
}

/// A compiled platemap: one row per plate well, one column per condition.
///
/// The table always covers the full plate extent - exactly
/// `shape.wells()` rows in row-major well order - regardless of how partial
/// the range coverage was. Cells the program never touched are absent.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionTable {
    shape: PlateShape,
    columns: Vec<String>,
    cells: Vec<Vec<Option<Value>>>,
}

impl ConditionTable {
    /// An empty table (no columns) over `shape`.
    pub fn new(shape: PlateShape) -> Self {
        TableBuilder::new(shape).build()
    }

    /// The plate extent this table covers.
    pub fn shape(&self) -> PlateShape {
        self.shape
    }

    /// Condition names, in first-seen order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows (always the full plate).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the table has any rows (false for any real plate shape).
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The value of one condition at one well, or `None` if absent.
    pub fn get(&self, well: Well, condition: &str) -> Option<&Value> {
        let row = self.shape.index_of(well)?;
        let col = self.columns.iter().position(|c| c == condition)?;
        self.cells[row][col].as_ref()
    }

    /// Like [`ConditionTable::get`], addressing the well by its canonical
    /// name (e.g. `"B7"`).
    pub fn get_by_name(&self, well: &str, condition: &str) -> Option<&Value> {
        let well = Well::from_str(well).ok()?;
        self.get(well, condition)
    }

    /// Iterate over all rows in row-major well order.
    pub fn rows(&self) -> impl Iterator<Item = (Well, &[Option<Value>])> + '_ {
        self.shape
            .iter_wells()
            .zip(self.cells.iter().map(|row| row.as_slice()))
    }

    /// Rows where every condition is present, in row-major well order.
    ///
    /// This is the counterpart of dropping unfilled wells before a join:
    /// wells a partial platemap never touched simply disappear.
    pub fn drop_missing(&self) -> Vec<(Well, Vec<&Value>)> {
        self.rows()
            .filter_map(|(well, cells)| {
                let values: Option<Vec<&Value>> = cells.iter().map(|c| c.as_ref()).collect();
                values.map(|v| (well, v))
            })
            .collect()
    }

    /// A new table with every absent cell of one condition filled with
    /// `value`. Unknown condition names leave the table unchanged.
    pub fn fill_missing(&self, condition: &str, value: impl Into<Value>) -> ConditionTable {
        let mut table = self.clone();
        if let Some(col) = table.columns.iter().position(|c| c == condition) {
            let value = value.into();
            for row in &mut table.cells {
                if row[col].is_none() {
                    row[col] = Some(value.clone());
                }
            }
        }
        table
    }
}

impl fmt::Display for ConditionTable {
    /// Render an aligned text table with a `well` index column; absent
    /// cells show as `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header: Vec<String> = vec!["well".to_string()];
        header.extend(self.columns.iter().cloned());

        let mut rendered: Vec<Vec<String>> = vec![header];
        for (well, cells) in self.rows() {
            let mut row = vec![well.name()];
            row.extend(cells.iter().map(|cell| match cell {
                Some(value) => value.to_string(),
                None => "-".to_string(),
            }));
            rendered.push(row);
        }

        let ncols = rendered[0].len();
        let widths: Vec<usize> = (0..ncols)
            .map(|i| rendered.iter().map(|row| row[i].len()).max().unwrap_or(0))
            .collect();

        for row in &rendered {
            for (i, (field, width)) in row.iter().zip(&widths).enumerate() {
                if i > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", field, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
