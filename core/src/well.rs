//! Well coordinates and the base-26 row-letter codec.
//!
//! A well is one sample position on a microtiter plate, addressed by a row
//! letter block and a column number. Rows use base-26 positional letters
//! (A=1 ... Z=26, AA=27, ...); columns are plain decimal. Both indices are
//! 1-based, so `A1` is the top-left well.

use crate::{PlateShape, WellError};
use std::fmt;
use std::str::FromStr;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A well coordinate: 1-based (row, column) pair.
///
/// Wells order row-major: `A1 < A2 < ... < B1`, which is the traversal order
/// used for broadcasting and for full-plate tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Well {
    /// 1-based row index (`A` = 1).
    pub row: usize,
    /// 1-based column index.
    pub col: usize,
}

impl Well {
    /// Create a well from 1-based row and column indices.
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row >= 1 && col >= 1, "well indices are 1-based");
        Self { row, col }
    }

    /// The canonical uppercase name of this well, e.g. `B7` or `AA3`.
    pub fn name(&self) -> String {
        format!("{}{}", row_to_letters(self.row), self.col)
    }

    /// Iterate sequentially through wells of `shape`, starting at this well
    /// and wrapping at the plate edges.
    pub fn walk(self, shape: PlateShape, traversal: Traversal) -> WellWalk {
        WellWalk {
            next: self,
            shape,
            traversal,
        }
    }
}

impl fmt::Display for Well {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", row_to_letters(self.row), self.col)
    }
}

impl FromStr for Well {
    type Err = WellError;

    /// Parse a well reference like `A1`, `g11`, or `AB10` (case-insensitive).
    ///
    /// No bounds checking happens here; the plate shape is not known at this
    /// point. Out-of-range references are rejected by the range resolver.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || WellError::Malformed {
            token: s.to_string(),
        };

        let letters_len = s.chars().take_while(|c| c.is_ascii_alphabetic()).count();
        if letters_len == 0 {
            return Err(malformed());
        }
        let (letters, digits) = s.split_at(letters_len);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let row = letters_to_row(letters).ok_or_else(malformed)?;
        let col: usize = digits.parse().map_err(|_| malformed())?;
        if col == 0 {
            return Err(malformed());
        }
        Ok(Well::new(row, col))
    }
}

/// Convert a block of row letters to a 1-based row index, in base 26.
///
/// Returns `None` if `letters` is empty, contains a non-alphabetic
/// character, or encodes an index beyond `usize`. `A` = 1, `Z` = 26,
/// `AA` = 27, `BA` = 53.
pub fn letters_to_row(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }
    let mut row = 0usize;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = (c.to_ascii_uppercase() as usize) - ('A' as usize) + 1;
        row = row.checked_mul(26)?.checked_add(digit)?;
    }
    Some(row)
}

/// Convert a 1-based row index to its letter block, in base 26.
///
/// `1` = `A`, `26` = `Z`, `27` = `AA`, `53` = `BA`.
pub fn row_to_letters(row: usize) -> String {
    debug_assert!(row >= 1, "row indices are 1-based");
    let mut letters = Vec::new();
    // Bijective base-26: no zero digit, so shift down before each division.
    let mut n = row;
    while n > 0 {
        n -= 1;
        letters.push(ALPHABET[n % 26]);
        n /= 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Direction of sequential well traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// Fill each row before moving to the next row (A1, A2, ..., B1, ...).
    #[default]
    ByRow,
    /// Fill each column before moving to the next column (A1, B1, ..., A2, ...).
    ByColumn,
}

/// Endless iterator over sequential wells of a plate, wrapping at the edges.
///
/// Created by [`Well::walk`]; take as many wells as needed:
///
/// ```
/// use platemap_core::{PlateShape, Traversal, Well};
///
/// let wells: Vec<String> = Well::new(8, 12)
///     .walk(PlateShape::default(), Traversal::ByRow)
///     .take(2)
///     .map(|w| w.name())
///     .collect();
/// assert_eq!(wells, ["H12", "A1"]);
/// ```
#[derive(Debug, Clone)]
pub struct WellWalk {
    next: Well,
    shape: PlateShape,
    traversal: Traversal,
}

impl Iterator for WellWalk {
    type Item = Well;

    fn next(&mut self) -> Option<Well> {
        let current = self.next;
        let (mut row, mut col) = (current.row, current.col);
        match self.traversal {
            Traversal::ByRow => {
                col += 1;
                if col > self.shape.cols {
                    col = 1;
                    row += 1;
                }
                if row > self.shape.rows {
                    row = 1;
                }
            }
            Traversal::ByColumn => {
                row += 1;
                if row > self.shape.rows {
                    row = 1;
                    col += 1;
                }
                if col > self.shape.cols {
                    col = 1;
                }
            }
        }
        self.next = Well::new(row, col);
        Some(current)
    }
}
