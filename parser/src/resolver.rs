//! Range resolution: well-range expressions to rectangular regions.
//!
//! An expression is a comma-separated list of region tokens. Each token is
//! parsed independently and contributes one rectangle; the resolver keeps the
//! per-token rectangles (the compiler needs their boundaries for nested
//! broadcasting) as well as producing the flattened, deduplicated coordinate
//! list.

use crate::{ResolveError, ResolveResult};
use platemap_core::{letters_to_row, PlateShape, Traversal, Well, WellError};
use regex_lite::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

fn well_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z]+[0-9]+$").expect("valid pattern"))
}

fn letters_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z]+$").expect("valid pattern"))
}

fn digits_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+$").expect("valid pattern"))
}

/// An axis-aligned rectangle of wells.
///
/// Construction normalizes the corners, so `top_left` is always the minimum
/// row and column and `bottom_right` the maximum: `B2:A1` and `A1:B2` denote
/// the same region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    top_left: Well,
    bottom_right: Well,
}

impl Region {
    /// Create a region from two corner wells, in either order.
    pub fn new(a: Well, b: Well) -> Self {
        Self {
            top_left: Well::new(a.row.min(b.row), a.col.min(b.col)),
            bottom_right: Well::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// Create a 1x1 region covering a single well.
    pub fn single(well: Well) -> Self {
        Self::new(well, well)
    }

    /// Top-left corner well.
    pub fn top_left(&self) -> Well {
        self.top_left
    }

    /// Bottom-right corner well.
    pub fn bottom_right(&self) -> Well {
        self.bottom_right
    }

    /// Number of rows the region spans.
    pub fn rows(&self) -> usize {
        self.bottom_right.row - self.top_left.row + 1
    }

    /// Number of columns the region spans.
    pub fn cols(&self) -> usize {
        self.bottom_right.col - self.top_left.col + 1
    }

    /// Total number of wells in the region.
    pub fn len(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Whether the region covers no wells. Corners are inclusive, so a
    /// constructed region always holds at least one well.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the well lies within this region.
    pub fn contains(&self, well: Well) -> bool {
        (self.top_left.row..=self.bottom_right.row).contains(&well.row)
            && (self.top_left.col..=self.bottom_right.col).contains(&well.col)
    }

    /// Iterate over the region's wells in row-major order.
    pub fn wells(&self) -> impl Iterator<Item = Well> + '_ {
        let (top, bottom) = (self.top_left, self.bottom_right);
        (top.row..=bottom.row)
            .flat_map(move |row| (top.col..=bottom.col).map(move |col| Well::new(row, col)))
    }

    /// The region's wells in the given traversal order.
    pub fn wells_by(&self, traversal: Traversal) -> Vec<Well> {
        match traversal {
            Traversal::ByRow => self.wells().collect(),
            Traversal::ByColumn => {
                let (top, bottom) = (self.top_left, self.bottom_right);
                (top.col..=bottom.col)
                    .flat_map(|col| (top.row..=bottom.row).map(move |row| Well::new(row, col)))
                    .collect()
            }
        }
    }
}

/// Resolve a well-range expression into its rectangular sub-regions, in
/// declaration order.
///
/// Regions may overlap; the spec compiler applies assignments in declaration
/// order, so later tokens win for any shared wells.
pub fn resolve(expr: &str, shape: PlateShape) -> ResolveResult<Vec<Region>> {
    expr.split(',')
        .map(|token| parse_region(token, shape))
        .collect()
}

/// Resolve a well-range expression into its ordered, deduplicated set of
/// well coordinates (row-major within each sub-region, sub-regions in
/// declaration order, first occurrence kept).
pub fn resolve_wells(expr: &str, shape: PlateShape) -> ResolveResult<Vec<Well>> {
    let mut wells = Vec::new();
    for region in resolve(expr, shape)? {
        for well in region.wells() {
            if !wells.contains(&well) {
                wells.push(well);
            }
        }
    }
    Ok(wells)
}

/// Parse one region token against a plate shape.
fn parse_region(token: &str, shape: PlateShape) -> ResolveResult<Region> {
    let mut endpoints = token.split(':');
    let (start, end) = match (endpoints.next(), endpoints.next(), endpoints.next()) {
        (Some(start), end, None) => (start, end),
        _ => return Err(ResolveError::malformed_range(token)),
    };

    match end {
        // A single well, e.g. `B6`.
        None => {
            let well = parse_well(start, shape)?;
            Ok(Region::single(well))
        }
        // A rectangle between two well references, e.g. `A1:B6`.
        Some(end) if well_regex().is_match(start) && well_regex().is_match(end) => {
            let a = parse_well(start, shape)?;
            let b = parse_well(end, shape)?;
            Ok(Region::new(a, b))
        }
        // A span of whole rows, e.g. `A:C` = rows A..C across every column.
        Some(end) if letters_regex().is_match(start) && letters_regex().is_match(end) => {
            let a = parse_row(start, token, shape)?;
            let b = parse_row(end, token, shape)?;
            Ok(Region::new(
                Well::new(a, 1),
                Well::new(b, shape.cols),
            ))
        }
        // A span of whole columns, e.g. `2:4` = columns 2..4 across every row.
        Some(end) if digits_regex().is_match(start) && digits_regex().is_match(end) => {
            let a = parse_col(start, token, shape)?;
            let b = parse_col(end, token, shape)?;
            Ok(Region::new(
                Well::new(1, a),
                Well::new(shape.rows, b),
            ))
        }
        Some(_) => Err(ResolveError::malformed_range(token)),
    }
}

/// Parse and bounds-check a single well reference.
fn parse_well(token: &str, shape: PlateShape) -> ResolveResult<Well> {
    let well = Well::from_str(token)?;
    if !shape.contains(well) {
        return Err(WellError::OutOfBounds {
            token: token.to_string(),
            rows: shape.rows,
            cols: shape.cols,
        }
        .into());
    }
    Ok(well)
}

fn parse_row(letters: &str, token: &str, shape: PlateShape) -> ResolveResult<usize> {
    let row = letters_to_row(letters).ok_or_else(|| WellError::Malformed {
        token: token.to_string(),
    })?;
    if row > shape.rows {
        return Err(WellError::OutOfBounds {
            token: token.to_string(),
            rows: shape.rows,
            cols: shape.cols,
        }
        .into());
    }
    Ok(row)
}

fn parse_col(digits: &str, token: &str, shape: PlateShape) -> ResolveResult<usize> {
    let col: usize = digits.parse().map_err(|_| WellError::Malformed {
        token: token.to_string(),
    })?;
    if col == 0 || col > shape.cols {
        return Err(WellError::OutOfBounds {
            token: token.to_string(),
            rows: shape.rows,
            cols: shape.cols,
        }
        .into());
    }
    Ok(col)
}
