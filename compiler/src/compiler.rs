//! Main compiler implementation.
//!
//! A [`Platemap`] collects named conditions in declaration order; `compile`
//! resolves each condition's range expression, broadcasts its value spec
//! onto the resolved regions, and assembles the full-plate table.

use crate::{CompileError, CompileResult, ConditionTable, TableBuilder};
use platemap_core::{Grid, PlateShape, Value, ValueSpec, Well};
use platemap_parser::{resolve, resolve_wells, Region};

/// A platemap program: an ordered set of named conditions over one plate.
///
/// ```
/// use platemap_compiler::Platemap;
/// use platemap_core::ValueSpec;
///
/// let table = Platemap::default()
///     .condition("strain", "A1:A3", "PAO1")
///     .condition("conc", "A1:A3", ValueSpec::flat([0, 10, 100]))
///     .compile()
///     .unwrap();
/// assert_eq!(table.len(), 96);
/// ```
#[derive(Debug, Clone)]
pub struct Platemap {
    shape: PlateShape,
    include_row_column: bool,
    conditions: Vec<Condition>,
}

/// One named condition: a range expression and the values to broadcast.
#[derive(Debug, Clone)]
struct Condition {
    name: String,
    range: String,
    spec: ValueSpec,
}

impl Default for Platemap {
    /// A platemap over the default 96-well plate.
    fn default() -> Self {
        Self::new(PlateShape::default())
    }
}

impl Platemap {
    /// Create a platemap over an explicit plate shape.
    pub fn new(shape: PlateShape) -> Self {
        Self {
            shape,
            include_row_column: false,
            conditions: Vec::new(),
        }
    }

    /// Add a named condition. Conditions apply in declaration order, so a
    /// later condition overwrites earlier assignments to the same cell.
    pub fn condition(
        mut self,
        name: impl Into<String>,
        range: impl Into<String>,
        spec: impl Into<ValueSpec>,
    ) -> Self {
        self.conditions.push(Condition {
            name: name.into(),
            range: range.into(),
            spec: spec.into(),
        });
        self
    }

    /// Also emit `row` / `column` columns holding each well's 0-indexed
    /// plate coordinates.
    ///
    /// The pair of names is reserved for coordinates: scaling recomputes a
    /// table's `row` / `column` columns for the target plate when both are
    /// present.
    pub fn include_row_column(mut self, include: bool) -> Self {
        self.include_row_column = include;
        self
    }

    /// Compile the program into a full-plate condition table.
    ///
    /// Fail-fast: the first malformed range, invalid well reference, or
    /// value-shape mismatch aborts the whole compile, with the offending
    /// condition named in the error.
    pub fn compile(&self) -> CompileResult<ConditionTable> {
        let mut builder = TableBuilder::new(self.shape);

        if self.include_row_column {
            for well in self.shape.iter_wells() {
                builder.set(well, "row", Value::Int(well.row as i64 - 1));
                builder.set(well, "column", Value::Int(well.col as i64 - 1));
            }
        }

        for condition in &self.conditions {
            let regions = resolve(&condition.range, self.shape)
                .map_err(|e| CompileError::range(&condition.name, e))?;
            broadcast(&mut builder, &condition.name, &regions, &condition.spec)?;
        }

        Ok(builder.build())
    }
}

/// Broadcast one condition's value spec onto its resolved regions.
fn broadcast(
    builder: &mut TableBuilder,
    name: &str,
    regions: &[Region],
    spec: &ValueSpec,
) -> CompileResult<()> {
    match spec {
        ValueSpec::Scalar(value) => {
            for region in regions {
                for well in region.wells() {
                    builder.set(well, name, value.clone());
                }
            }
        }
        ValueSpec::Flat(values) => {
            let total: usize = regions.iter().map(Region::len).sum();
            if values.len() != total {
                return Err(CompileError::shape_mismatch(
                    name,
                    format!("{} wells", total),
                    format!("{} values", values.len()),
                ));
            }
            let wells = regions.iter().flat_map(Region::wells);
            for (well, value) in wells.zip(values) {
                builder.set(well, name, value.clone());
            }
        }
        ValueSpec::Nested(grid) => {
            // One grid, re-applied to every sub-region independently.
            let extent = grid_extent(name, grid)?;
            for region in regions {
                broadcast_grid(builder, name, region, grid, extent)?;
            }
        }
        ValueSpec::PerRegion(grids) => {
            if grids.len() != regions.len() {
                return Err(CompileError::shape_mismatch(
                    name,
                    format!("{} sub-regions", regions.len()),
                    format!("{} grids", grids.len()),
                ));
            }
            for (region, grid) in regions.iter().zip(grids) {
                let extent = grid_extent(name, grid)?;
                broadcast_grid(builder, name, region, grid, extent)?;
            }
        }
    }
    Ok(())
}

/// Assign a grid element-wise to a region of matching extent.
fn broadcast_grid(
    builder: &mut TableBuilder,
    name: &str,
    region: &Region,
    grid: &Grid,
    (grid_rows, grid_cols): (usize, usize),
) -> CompileResult<()> {
    if region.rows() != grid_rows || region.cols() != grid_cols {
        return Err(CompileError::shape_mismatch(
            name,
            format!("a {}x{} region", region.rows(), region.cols()),
            format!("a {}x{} grid", grid_rows, grid_cols),
        ));
    }
    let top_left = region.top_left();
    for (r, row) in grid.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            let well = Well::new(top_left.row + r, top_left.col + c);
            builder.set(well, name, value.clone());
        }
    }
    Ok(())
}

/// The (rows, cols) extent of a grid; ragged grids are a shape mismatch.
fn grid_extent(name: &str, grid: &Grid) -> CompileResult<(usize, usize)> {
    let rows = grid.len();
    let cols = grid.first().map(Vec::len).unwrap_or(0);
    if grid.iter().any(|row| row.len() != cols) {
        return Err(CompileError::shape_mismatch(
            name,
            "a rectangular grid",
            "a ragged grid",
        ));
    }
    Ok((rows, cols))
}

/// Compile a table marking a hand-picked list of wells with `Pick = true`.
///
/// The well list accepts the full range grammar, so entries may be single
/// wells (`"A1"`) or ranges (`"A1:A3"`).
pub fn cherrypick(picked: &[&str], shape: PlateShape) -> CompileResult<ConditionTable> {
    cherrypick_with(picked, &[("Pick", Value::Bool(true))], &[], shape)
}

/// Compile a table assigning `values` to the picked wells and `others` to
/// every remaining well on the plate.
pub fn cherrypick_with(
    picked: &[&str],
    values: &[(&str, Value)],
    others: &[(&str, Value)],
    shape: PlateShape,
) -> CompileResult<ConditionTable> {
    let expr = picked.join(",");
    let picked_wells = resolve_wells(&expr, shape).map_err(|e| {
        let condition = values.first().map(|(name, _)| *name).unwrap_or("Pick");
        CompileError::range(condition, e)
    })?;

    let mut builder = TableBuilder::new(shape);
    for (name, value) in values {
        for &well in &picked_wells {
            builder.set(well, name, value.clone());
        }
    }
    for (name, value) in others {
        for well in shape.iter_wells().filter(|w| !picked_wells.contains(w)) {
            builder.set(well, name, value.clone());
        }
    }
    Ok(builder.build())
}
