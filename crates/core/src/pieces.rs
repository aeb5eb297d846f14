//! Pieces module - shape matrices and the five piece templates
//!
//! A shape is a small row-major matrix of 0/1 cells. Templates are stored in a
//! single fixed orientation; every other orientation is produced by the
//! rotations in [`crate::geometry`].

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::ShapeError;
use crate::types::{PieceKind, FILLED, MAX_SHAPE_DIM};

/// One row of a shape.
pub type ShapeRow = ArrayVec<u8, MAX_SHAPE_DIM>;

/// A 0/1 cell matrix in a bounding box of at most `MAX_SHAPE_DIM` per side.
///
/// Rows are ordered top to bottom and all have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: ArrayVec<ShapeRow, MAX_SHAPE_DIM>,
}

impl Shape {
    /// Build a shape from rows of 0/1 cells, validating the matrix.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let expected = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if rows.is_empty() || expected == 0 {
            return Err(ShapeError::Empty);
        }
        if rows.len() > MAX_SHAPE_DIM || expected > MAX_SHAPE_DIM {
            return Err(ShapeError::TooLarge {
                rows: rows.len(),
                cols: expected,
            });
        }

        let mut out = ArrayVec::new();
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != expected {
                return Err(ShapeError::Ragged {
                    row: r,
                    len: row.len(),
                    expected,
                });
            }
            if let Some((c, &value)) = row.iter().enumerate().find(|&(_, &v)| v > FILLED) {
                return Err(ShapeError::InvalidCell { row: r, col: c, value });
            }
            out.push(row.iter().copied().collect());
        }
        Ok(Self { rows: out })
    }

    /// Wrap rows already known to be a well-formed matrix.
    pub(crate) fn from_raw(rows: ArrayVec<ShapeRow, MAX_SHAPE_DIM>) -> Self {
        Self { rows }
    }

    /// Rows, top to bottom.
    pub fn rows(&self) -> &[ShapeRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns of the bounding box (see [`crate::width`] for occupied columns).
    pub fn cols(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    /// Number of filled cells.
    pub fn cell_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| r.iter())
            .filter(|&&c| c == FILLED)
            .count()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                f.write_str(if cell == FILLED { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

const STRAIGHT: &[&[u8]] = &[&[1, 1, 1, 1]];
const SQUARE: &[&[u8]] = &[&[1, 1], &[1, 1]];
const N_SHAPE: &[&[u8]] = &[&[0, 1], &[1, 1], &[1, 0]];
const L_SHAPE: &[&[u8]] = &[&[1, 0], &[1, 0], &[1, 1]];
const SEVEN_SHAPE: &[&[u8]] = &[&[0, 1], &[0, 1], &[1, 1]];

/// Template rows for a piece kind
pub fn template(kind: PieceKind) -> &'static [&'static [u8]] {
    match kind {
        PieceKind::Straight => STRAIGHT,
        PieceKind::Square => SQUARE,
        PieceKind::NShape => N_SHAPE,
        PieceKind::LShape => L_SHAPE,
        PieceKind::SevenShape => SEVEN_SHAPE,
    }
}

/// Get a fresh copy of the template shape for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    Shape::from_raw(
        template(kind)
            .iter()
            .map(|row| row.iter().copied().collect())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_are_valid_shapes() {
        for kind in PieceKind::ALL {
            let validated = Shape::from_rows(template(kind)).unwrap();
            assert_eq!(validated, get_shape(kind), "{}", kind.as_str());
        }
    }

    #[test]
    fn template_cell_counts() {
        assert_eq!(get_shape(PieceKind::Straight).cell_count(), 4);
        assert_eq!(get_shape(PieceKind::Square).cell_count(), 4);
        assert_eq!(get_shape(PieceKind::NShape).cell_count(), 4);
        assert_eq!(get_shape(PieceKind::LShape).cell_count(), 4);
        assert_eq!(get_shape(PieceKind::SevenShape).cell_count(), 4);
    }

    #[test]
    fn from_rows_rejects_malformed_input() {
        let empty: [&[u8]; 0] = [];
        assert_eq!(Shape::from_rows(&empty), Err(ShapeError::Empty));
        assert_eq!(Shape::from_rows(&[[0u8; 0]]), Err(ShapeError::Empty));
        assert_eq!(
            Shape::from_rows(&[&[1u8, 1][..], &[1u8][..]]),
            Err(ShapeError::Ragged {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(
            Shape::from_rows(&[[1u8; 5]]),
            Err(ShapeError::TooLarge { rows: 1, cols: 5 })
        );
        assert_eq!(
            Shape::from_rows(&[[1u8, 2]]),
            Err(ShapeError::InvalidCell {
                row: 0,
                col: 1,
                value: 2
            })
        );
    }

    #[test]
    fn display_draws_hashes_and_dots() {
        assert_eq!(get_shape(PieceKind::NShape).to_string(), ".#\n##\n#.");
    }
}
