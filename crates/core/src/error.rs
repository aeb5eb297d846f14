//! Errors reported by the engine.

use thiserror::Error;

use crate::types::MAX_SHAPE_DIM;

/// Configuration rejected at engine construction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The board cannot host the largest shape between its walls.
    #[error("board size {size} is too small, need at least {min}")]
    BoardTooSmall { size: usize, min: usize },
}

/// Reason a matrix could not be turned into a [`Shape`](crate::Shape).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// No rows, or rows with no columns.
    #[error("shape has no cells")]
    Empty,
    /// Rows of differing lengths.
    #[error("row {row} has {len} cells, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// More than [`MAX_SHAPE_DIM`] rows or columns.
    #[error("shape is {rows}x{cols}, limit is {max}x{max}", max = MAX_SHAPE_DIM)]
    TooLarge { rows: usize, cols: usize },
    /// A cell other than 0 or 1.
    #[error("cell ({row}, {col}) holds {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },
}
