//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The playfield is a square of `board_size` cells per side, chosen at runtime:
//!
//! - **Default size**: 12 (10 playable columns between two wall columns)
//! - **Walls**: column `0`, column `board_size - 1` and row `board_size - 1`
//! - **Minimum size**: [`MIN_BOARD_SIZE`], the largest shape dimension plus both walls
//!
//! # Commands
//!
//! The driver talks to the engine through [`Command`]. The single-character
//! key table is kept for line-oriented drivers:
//!
//! | Key | Command |
//! |-----|---------|
//! | `a` | [`Command::MoveLeft`] |
//! | `d` | [`Command::MoveRight`] |
//! | `w` | [`Command::RotateLeft`] |
//! | `s` | [`Command::RotateRight`] |
//! | `f` | [`Command::Drop`] |
//!
//! # Examples
//!
//! ```
//! use walltris_types::{Command, PieceKind, DEFAULT_BOARD_SIZE, MIN_BOARD_SIZE};
//!
//! assert_eq!(PieceKind::LShape.as_str(), "L-shape");
//!
//! // Key table, matched exactly
//! assert_eq!(Command::from_char('f'), Some(Command::Drop));
//! assert_eq!(Command::from_char('F'), None);
//! assert_eq!(Command::from_char('x'), None);
//!
//! assert_eq!(DEFAULT_BOARD_SIZE, 12);
//! assert_eq!(MIN_BOARD_SIZE, 6);
//! ```

/// Largest row or column count of any shape, in any orientation.
pub const MAX_SHAPE_DIM: usize = 4;

/// Smallest board that can host every shape: the largest dimension plus two walls.
pub const MIN_BOARD_SIZE: usize = MAX_SHAPE_DIM + 2;

/// Board side length used when none is configured.
pub const DEFAULT_BOARD_SIZE: usize = 12;

/// Occupancy value of a wall or settled cell.
pub const FILLED: u8 = 1;

/// Occupancy value of an empty cell.
pub const EMPTY: u8 = 0;

/// The five piece kinds
///
/// - **Straight**: 1x4 bar
/// - **Square**: 2x2 block
/// - **NShape**: 3-tall kink (`.X / XX / X.`)
/// - **LShape**: 3-tall L with the foot on the right
/// - **SevenShape**: 3-tall mirror of the L (`.X / .X / XX`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Straight,
    Square,
    NShape,
    LShape,
    SevenShape,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 5] = [
        PieceKind::Straight,
        PieceKind::Square,
        PieceKind::NShape,
        PieceKind::LShape,
        PieceKind::SevenShape,
    ];

    /// Catalog name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Straight => "straight",
            PieceKind::Square => "square",
            PieceKind::NShape => "n-shape",
            PieceKind::LShape => "L-shape",
            PieceKind::SevenShape => "7-shape",
        }
    }
}

/// Commands the driver can apply to the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Shift the piece one column left
    MoveLeft,
    /// Shift the piece one column right
    MoveRight,
    /// Quarter-turn the piece to the left
    RotateLeft,
    /// Quarter-turn the piece to the right
    RotateRight,
    /// Settle the piece on its resting row and commit it into the board
    Drop,
}

impl Command {
    /// Map a single key character to a command.
    ///
    /// Letters are case-sensitive. Unknown characters yield `None` and are
    /// ignored by drivers.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(Command::MoveLeft),
            'd' => Some(Command::MoveRight),
            'w' => Some(Command::RotateLeft),
            's' => Some(Command::RotateRight),
            'f' => Some(Command::Drop),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_board_fits_largest_shape_between_walls() {
        assert_eq!(MIN_BOARD_SIZE, MAX_SHAPE_DIM + 2);
        assert!(DEFAULT_BOARD_SIZE >= MIN_BOARD_SIZE);
    }

    #[test]
    fn piece_kind_names_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn command_key_table_matches_classic_layout() {
        assert_eq!(Command::from_char('a'), Some(Command::MoveLeft));
        assert_eq!(Command::from_char('d'), Some(Command::MoveRight));
        assert_eq!(Command::from_char('w'), Some(Command::RotateLeft));
        assert_eq!(Command::from_char('s'), Some(Command::RotateRight));
        assert_eq!(Command::from_char('f'), Some(Command::Drop));
        assert_eq!(Command::from_char('q'), None);
    }

    #[test]
    fn command_key_table_is_case_sensitive() {
        for c in ['A', 'D', 'W', 'S', 'F'] {
            assert_eq!(Command::from_char(c), None, "{c}");
        }
    }
}
