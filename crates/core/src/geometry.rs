//! Geometry module - occupied width and quarter-turn rotations
//!
//! All functions are pure: they take a shape and return a new value without
//! looking at the board. Whether a rotated shape may be used is decided by the
//! caller through [`crate::place::can_place_at`].

use arrayvec::ArrayVec;

use crate::pieces::{Shape, ShapeRow};
use crate::types::MAX_SHAPE_DIM;

/// Number of columns that contain at least one filled cell.
///
/// Shapes live in a bounding box; only occupied columns count towards the
/// horizontal span checked against the walls.
pub fn width(shape: &Shape) -> usize {
    (0..shape.cols())
        .filter(|&c| shape.rows().iter().map(|r| u32::from(r[c])).sum::<u32>() >= 1)
        .count()
}

/// Columns of `rows`, each read top to bottom, as the new rows.
fn transpose<'a>(rows: impl Iterator<Item = &'a ShapeRow> + Clone) -> ArrayVec<ShapeRow, MAX_SHAPE_DIM> {
    let cols = rows.clone().next().map_or(0, |r| r.len());
    (0..cols)
        .map(|c| rows.clone().map(|r| r[c]).collect())
        .collect()
}

/// Transpose the matrix, then reverse the order of the resulting rows.
///
/// ```
/// use walltris_core::{rotate_clockwise, Shape};
///
/// let l = Shape::from_rows(&[[1u8, 0], [1, 0], [1, 1]]).unwrap();
/// let turned = Shape::from_rows(&[[0u8, 0, 1], [1, 1, 1]]).unwrap();
/// assert_eq!(rotate_clockwise(&l), turned);
/// ```
pub fn rotate_clockwise(shape: &Shape) -> Shape {
    let mut rows = transpose(shape.rows().iter());
    rows.reverse();
    Shape::from_raw(rows)
}

/// Reverse the order of the rows, then transpose.
pub fn rotate_counter_clockwise(shape: &Shape) -> Shape {
    Shape::from_raw(transpose(shape.rows().iter().rev()))
}
