//! Board module - manages the game grid
//!
//! The board is a `size x size` grid of occupancy counts stored in a flat
//! row-major buffer. Coordinates are (x, y) with x growing to the right and
//! y growing downwards; row 0 is the top.
//!
//! Column 0, column `size - 1` and row `size - 1` are walls. They are filled at
//! construction and never change; interior cells only go from empty to filled.

use std::ops::Range;

use crate::pieces::Shape;
use crate::types::{EMPTY, FILLED};

/// The game board - square grid with permanent walls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (y * size + x)
    cells: Vec<u8>,
}

impl Board {
    /// Create a board with both side walls and the floor filled
    pub fn new(size: usize) -> Self {
        let mut cells = vec![EMPTY; size * size];
        for y in 0..size {
            for x in 0..size {
                if x == 0 || x == size - 1 || y == size - 1 {
                    cells[y * size + x] = FILLED;
                }
            }
        }
        Self { size, cells }
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(y * self.size + x)
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the occupancy count at (x, y), `None` when out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Check if position is a wall cell
    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && (x == 0 || x == self.size - 1 || y == self.size - 1)
    }

    /// Check if position is within bounds and filled
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Some(c) if c >= FILLED)
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.size {
            return None;
        }
        let start = y * self.size;
        Some(&self.cells[start..start + self.size])
    }

    fn row_mut(&mut self, y: usize) -> Option<&mut [u8]> {
        if y >= self.size {
            return None;
        }
        let start = y * self.size;
        Some(&mut self.cells[start..start + self.size])
    }

    /// Columns `cols` of `row`, clipped to the board
    fn span(&self, cols: &Range<usize>) -> Range<usize> {
        cols.start.min(self.size)..cols.end.min(self.size)
    }

    /// Check whether adding `cells` onto columns `cols` of row `y` would
    /// produce a cell of 2 or more. Cells pair up left to right; the shorter
    /// side decides how many are compared.
    pub fn probe_row(&self, y: usize, cols: Range<usize>, cells: &[u8]) -> bool {
        let span = self.span(&cols);
        match self.row(y) {
            Some(row) => row[span]
                .iter()
                .zip(cells)
                .any(|(&b, &s)| b.saturating_add(s) > FILLED),
            None => false,
        }
    }

    /// Add `cells` onto columns `cols` of row `y`.
    pub fn overlay_row(&mut self, y: usize, cols: Range<usize>, cells: &[u8]) {
        let span = self.span(&cols);
        if let Some(row) = self.row_mut(y) {
            for (b, &s) in row[span].iter_mut().zip(cells) {
                *b = b.saturating_add(s);
            }
        }
    }

    /// Check whether the shape, laid over the sub-rectangle `rows` x `cols`,
    /// would overlap any filled cell. Does not modify the board.
    pub fn probe(&self, rows: Range<usize>, cols: Range<usize>, shape: &Shape) -> bool {
        rows.zip(shape.rows())
            .any(|(y, cells)| self.probe_row(y, cols.clone(), cells))
    }

    /// Add the shape's cells onto the sub-rectangle `rows` x `cols`.
    pub fn overlay(&mut self, rows: Range<usize>, cols: Range<usize>, shape: &Shape) {
        for (y, cells) in rows.zip(shape.rows()) {
            self.overlay_row(y, cols.clone(), cells);
        }
    }

    /// Number of filled cells, walls included
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c >= FILLED).count()
    }

    /// Number of filled cells inside the walls
    pub fn interior_filled_count(&self) -> usize {
        (0..self.size)
            .flat_map(|y| (0..self.size).map(move |x| (x, y)))
            .filter(|&(x, y)| !self.is_wall(x, y) && self.is_filled(x, y))
            .count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Create from rows for testing, walls included as given
    #[cfg(test)]
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len();
        assert!(rows.iter().all(|r| r.len() == size));
        Self {
            size,
            cells: rows.iter().flat_map(|r| r.iter().copied()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::get_shape;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(6);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(5, 0), Some(5));
        assert_eq!(board.index(0, 1), Some(6));
        assert_eq!(board.index(5, 5), Some(35));
        assert_eq!(board.index(6, 0), None);
        assert_eq!(board.index(0, 6), None);
    }

    #[test]
    fn test_new_board_has_walls_only() {
        let board = Board::new(6);
        for y in 0..6 {
            for x in 0..6 {
                let wall = x == 0 || x == 5 || y == 5;
                assert_eq!(board.is_wall(x, y), wall, "({}, {})", x, y);
                assert_eq!(board.is_filled(x, y), wall, "({}, {})", x, y);
            }
        }
        assert_eq!(board.filled_count(), 6 + 6 + 4);
        assert_eq!(board.interior_filled_count(), 0);
    }

    #[test]
    fn test_probe_detects_overlap_with_floor() {
        let board = Board::new(6);
        let square = get_shape(PieceKind::Square);
        assert!(!board.probe(3..5, 2..4, &square));
        assert!(board.probe(4..6, 2..4, &square));
        // Touching the left wall.
        assert!(board.probe(1..3, 0..2, &square));
    }

    #[test]
    fn test_probe_does_not_mutate() {
        let board = Board::new(6);
        let before = board.clone();
        let _ = board.probe(4..6, 1..5, &get_shape(PieceKind::Straight));
        assert_eq!(board, before);
    }

    #[test]
    fn test_overlay_adds_cells() {
        let mut board = Board::new(6);
        board.overlay(2..5, 2..4, &get_shape(PieceKind::LShape));
        assert_eq!(board.row(2), Some(&[1, 0, 1, 0, 0, 1][..]));
        assert_eq!(board.row(3), Some(&[1, 0, 1, 0, 0, 1][..]));
        assert_eq!(board.row(4), Some(&[1, 0, 1, 1, 0, 1][..]));
        assert_eq!(board.interior_filled_count(), 4);
    }

    #[test]
    fn test_probe_row_pairs_shorter_side() {
        let board = Board::from_rows(&[
            &[1, 0, 0, 1],
            &[1, 0, 1, 1],
            &[1, 0, 0, 1],
            &[1, 1, 1, 1],
        ]);
        assert!(board.probe_row(1, 1..3, &[0, 1]));
        assert!(!board.probe_row(1, 1..2, &[0, 1]));
        assert!(!board.probe_row(9, 1..3, &[1, 1]));
    }
}
