use thiserror::Error;
use tracing::debug;

use crate::board::Board;
use crate::geometry::width;
use crate::pieces::Shape;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    #[error("column {left} puts the shape outside the walls")]
    OutOfBounds { left: usize },
    #[error("no resting row for the shape at column {left}")]
    NoRestingRow { left: usize },
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::OutOfBounds { .. } => "out_of_bounds",
            PlaceError::NoRestingRow { .. } => "game_over",
        }
    }
}

/// Whether the shape's occupied columns, starting at `left`, stay strictly
/// between the wall columns `0` and `board_size - 1`.
///
/// Horizontal only: settled cells are not consulted.
pub fn can_place_at(board_size: usize, left: usize, shape: &Shape) -> bool {
    left >= 1 && left + width(shape) + 1 <= board_size
}

/// Find the floor index of the lowest band of rows that can host the shape.
///
/// For a shape of height `h`, floor indices `board_size - 1` down to `h` are
/// tried in order; the band is rows `row - h .. row`. The returned index is one
/// past the band's bottom row. `None` means no band fits and the game is over.
pub fn find_resting_row(board: &Board, shape: &Shape, left: usize) -> Option<usize> {
    let h = shape.height();
    let cols = left..left + width(shape);
    (h.max(1)..board.size())
        .rev()
        .find(|&row| !board.probe(row - h..row, cols.clone(), shape))
}

/// Write the shape into the board with its bottom row just above `row`.
///
/// Shape rows are laid bottom-to-top while the row cursor walks upwards, the
/// same mapping [`find_resting_row`] probed.
pub fn commit(board: &mut Board, shape: &Shape, left: usize, row: usize) {
    let cols = left..left + width(shape);
    let mut cursor = row;
    for cells in shape.rows().iter().rev() {
        cursor -= 1;
        board.overlay_row(cursor, cols.clone(), cells);
    }
}

/// Resolve the resting row and commit the shape there.
pub fn drop_shape(board: &mut Board, shape: &Shape, left: usize) -> Result<usize, PlaceError> {
    if !can_place_at(board.size(), left, shape) {
        return Err(PlaceError::OutOfBounds { left });
    }
    let row = find_resting_row(board, shape, left).ok_or(PlaceError::NoRestingRow { left })?;
    commit(board, shape, left, row);
    debug!(left, row, "shape committed");
    Ok(row)
}
