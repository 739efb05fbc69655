//! Plate geometry: the rectangular grid a platemap is compiled against.

use crate::Well;
use std::fmt;

/// Standard plate formats, as `(total wells, rows, cols)`.
///
/// Sorted by size; `infer` relies on this ordering to return the smallest
/// shape that fits.
const STANDARD_SHAPES: &[(usize, usize, usize)] = &[
    (6, 2, 3),
    (12, 3, 4),
    (24, 4, 6),
    (48, 6, 8),
    (96, 8, 12),
    (384, 16, 24),
    (1536, 32, 48),
];

/// The rectangular extent of a microtiter plate.
///
/// Both the range resolver and the spec compiler take the shape explicitly,
/// so multiple plate formats can be used safely within one process. The
/// default is the 96-well format (8 rows x 12 columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlateShape {
    /// Number of rows (lettered).
    pub rows: usize,
    /// Number of columns (numbered).
    pub cols: usize,
}

impl Default for PlateShape {
    fn default() -> Self {
        Self { rows: 8, cols: 12 }
    }
}

impl fmt::Display for PlateShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl PlateShape {
    /// Create a plate shape from explicit row and column counts.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Look up a standard plate format by its total well count
    /// (6, 12, 24, 48, 96, 384, or 1536).
    pub fn with_wells(wells: usize) -> Option<Self> {
        STANDARD_SHAPES
            .iter()
            .find(|(n, _, _)| *n == wells)
            .map(|&(_, rows, cols)| Self { rows, cols })
    }

    /// Total number of wells on the plate.
    pub fn wells(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the well lies within this plate.
    pub fn contains(&self, well: Well) -> bool {
        (1..=self.rows).contains(&well.row) && (1..=self.cols).contains(&well.col)
    }

    /// Row-major position of a well on this plate, if it is contained.
    pub fn index_of(&self, well: Well) -> Option<usize> {
        if self.contains(well) {
            Some((well.row - 1) * self.cols + (well.col - 1))
        } else {
            None
        }
    }

    /// Iterate over every well of the plate in row-major order.
    pub fn iter_wells(&self) -> impl Iterator<Item = Well> + '_ {
        let cols = self.cols;
        (1..=self.rows).flat_map(move |row| (1..=cols).map(move |col| Well::new(row, col)))
    }

    /// All standard shapes that can accommodate every well in `wells`,
    /// smallest first.
    pub fn infer_all<I>(wells: I) -> Vec<PlateShape>
    where
        I: IntoIterator<Item = Well>,
    {
        let mut max_row = 0;
        let mut max_col = 0;
        for well in wells {
            max_row = max_row.max(well.row);
            max_col = max_col.max(well.col);
        }
        STANDARD_SHAPES
            .iter()
            .filter(|&&(_, rows, cols)| rows >= max_row && cols >= max_col)
            .map(|&(_, rows, cols)| PlateShape { rows, cols })
            .collect()
    }

    /// The smallest standard shape that accommodates every well in `wells`,
    /// or `None` if even a 1536-well plate is too small.
    pub fn infer<I>(wells: I) -> Option<PlateShape>
    where
        I: IntoIterator<Item = Well>,
    {
        PlateShape::infer_all(wells).into_iter().next()
    }

    /// Like [`PlateShape::infer`], but returns `preferred` when it is among
    /// the candidate shapes (even if a smaller one would fit).
    pub fn infer_preferring<I>(wells: I, preferred: PlateShape) -> Option<PlateShape>
    where
        I: IntoIterator<Item = Well>,
    {
        let candidates = PlateShape::infer_all(wells);
        if candidates.contains(&preferred) {
            return Some(preferred);
        }
        candidates.into_iter().next()
    }
}
