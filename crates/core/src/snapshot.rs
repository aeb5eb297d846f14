use crate::board::Board;
use crate::game_state::ActivePiece;
use crate::pieces::Shape;
use crate::types::{PieceKind, FILLED};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub left: usize,
}

impl From<&ActivePiece> for ActiveSnapshot {
    fn from(value: &ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape.clone(),
            left: value.left,
        }
    }
}

/// Read-only copy of the board cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    size: usize,
    cells: Vec<u8>,
}

impl BoardSnapshot {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.cells[y * self.size + x])
    }

    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Some(c) if c >= FILLED)
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.size.max(1))
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        Self {
            size: board.size(),
            cells: board.cells().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: BoardSnapshot,
    pub active: Option<ActiveSnapshot>,
    pub game_over: bool,
    pub pieces_committed: u32,
}
