//! Game state module - the active piece controller and the engine facade
//!
//! [`GameState`] exclusively owns the board, the shape catalog and the active
//! piece. Every operation runs to completion before the next one; moves and
//! rotations are validated against the walls only, and the board is touched
//! solely by a drop.

use tracing::{debug, trace};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::geometry::{rotate_clockwise, rotate_counter_clockwise, width};
use crate::pieces::{get_shape, Shape};
use crate::place::{can_place_at, drop_shape, PlaceError};
use crate::rng::ShapeCatalog;
use crate::snapshot::{ActiveSnapshot, BoardSnapshot, GameSnapshot};
use crate::types::{Command, PieceKind};

/// Piece currently in play
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Column of the shape's leftmost cell
    pub left: usize,
}

impl ActivePiece {
    /// Create a piece horizontally centered on a board of `board_size`
    pub fn spawn(kind: PieceKind, shape: Shape, board_size: usize) -> Self {
        let left = board_size.saturating_sub(width(&shape)) / 2;
        Self { kind, shape, left }
    }
}

/// Result of [`GameState::apply`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The move or rotation was accepted
    Moved(ActiveSnapshot),
    /// The candidate was rejected; the piece is as it was
    Unchanged(ActiveSnapshot),
    /// The piece was committed with its bottom row just above `row`
    Committed { row: usize },
    /// No resting row existed; the game has ended
    GameOver,
    /// No piece has been spawned
    NoActivePiece,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    catalog: ShapeCatalog,
    active: Option<ActivePiece>,
    game_over: bool,
    pieces_committed: u32,
}

impl GameState {
    /// Create a new game, failing fast on a board too small for every shape
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(board_size = config.board_size, seed = ?config.seed, "new game");
        Ok(Self {
            config,
            board: Board::new(config.board_size),
            catalog: ShapeCatalog::new(config.seed),
            active: None,
            game_over: false,
            pieces_committed: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn pieces_committed(&self) -> u32 {
        self.pieces_committed
    }

    /// Seed of the piece RNG, for replaying a session
    pub fn seed(&self) -> u64 {
        self.catalog.seed()
    }

    /// Draw a random piece and make it the active one.
    ///
    /// Returns `None` once the game is over.
    pub fn next_piece(&mut self) -> Option<ActiveSnapshot> {
        if self.game_over {
            return None;
        }
        let (kind, shape) = self.catalog.random();
        Some(self.spawn_shape(kind, shape))
    }

    /// Make a specific kind the active piece, replacing any current one.
    pub fn spawn(&mut self, kind: PieceKind) -> Option<ActiveSnapshot> {
        if self.game_over {
            return None;
        }
        Some(self.spawn_shape(kind, get_shape(kind)))
    }

    fn spawn_shape(&mut self, kind: PieceKind, shape: Shape) -> ActiveSnapshot {
        let piece = ActivePiece::spawn(kind, shape, self.config.board_size);
        debug!(kind = kind.as_str(), left = piece.left, "spawn piece");
        let snap = ActiveSnapshot::from(&piece);
        self.active = Some(piece);
        snap
    }

    /// Shift the active piece by `dx` columns if it stays inside the walls
    pub fn try_move(&mut self, dx: isize) -> bool {
        let size = self.config.board_size;
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        match active.left.checked_add_signed(dx) {
            Some(left) if can_place_at(size, left, &active.shape) => {
                active.left = left;
                true
            }
            _ => {
                trace!(left = active.left, dx, "move rejected");
                false
            }
        }
    }

    /// Rotate the active piece in place; no horizontal adjustment is tried
    pub fn try_rotate(&mut self, clockwise: bool) -> bool {
        let size = self.config.board_size;
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        let rotated = if clockwise {
            rotate_clockwise(&active.shape)
        } else {
            rotate_counter_clockwise(&active.shape)
        };
        if can_place_at(size, active.left, &rotated) {
            active.shape = rotated;
            true
        } else {
            trace!(left = active.left, clockwise, "rotation rejected");
            false
        }
    }

    /// Commit the active piece on its resting row
    pub fn drop_piece(&mut self) -> ApplyOutcome {
        if self.game_over {
            return ApplyOutcome::GameOver;
        }
        let Some(active) = self.active.take() else {
            return ApplyOutcome::NoActivePiece;
        };
        match drop_shape(&mut self.board, &active.shape, active.left) {
            Ok(row) => {
                self.pieces_committed += 1;
                ApplyOutcome::Committed { row }
            }
            Err(err @ PlaceError::NoRestingRow { .. }) => {
                debug!(code = err.code(), pieces = self.pieces_committed, "game over");
                self.game_over = true;
                ApplyOutcome::GameOver
            }
            Err(err @ PlaceError::OutOfBounds { .. }) => {
                // Accepted moves keep the piece inside the walls.
                debug!(%err, "drop rejected");
                let snap = ActiveSnapshot::from(&active);
                self.active = Some(active);
                ApplyOutcome::Unchanged(snap)
            }
        }
    }

    /// Apply a driver command to the active piece
    pub fn apply(&mut self, command: Command) -> ApplyOutcome {
        if self.game_over {
            return ApplyOutcome::GameOver;
        }
        let changed = match command {
            Command::MoveLeft => self.try_move(-1),
            Command::MoveRight => self.try_move(1),
            Command::RotateLeft => self.try_rotate(true),
            Command::RotateRight => self.try_rotate(false),
            Command::Drop => return self.drop_piece(),
        };
        match self.active.as_ref().map(ActiveSnapshot::from) {
            None => ApplyOutcome::NoActivePiece,
            Some(snap) if changed => ApplyOutcome::Moved(snap),
            Some(snap) => ApplyOutcome::Unchanged(snap),
        }
    }

    /// Read-only copy of the board for rendering
    pub fn board_snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from(&self.board)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board_snapshot(),
            active: self.active.as_ref().map(ActiveSnapshot::from),
            game_over: self.game_over,
            pieces_committed: self.pieces_committed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(size: usize) -> GameState {
        GameState::new(GameConfig::new(size).with_seed(1)).unwrap()
    }

    #[test]
    fn new_rejects_small_board() {
        let err = GameState::new(GameConfig::new(4)).unwrap_err();
        assert_eq!(err, ConfigError::BoardTooSmall { size: 4, min: 6 });
    }

    #[test]
    fn spawn_centers_piece() {
        let mut gs = game(12);
        assert_eq!(gs.spawn(PieceKind::Square).unwrap().left, 5);
        assert_eq!(gs.spawn(PieceKind::Straight).unwrap().left, 4);
        assert_eq!(gs.spawn(PieceKind::LShape).unwrap().left, 5);

        let mut odd = game(7);
        assert_eq!(odd.spawn(PieceKind::Square).unwrap().left, 2);
    }

    #[test]
    fn commands_without_piece_report_no_active() {
        let mut gs = game(12);
        assert_eq!(gs.apply(Command::MoveLeft), ApplyOutcome::NoActivePiece);
        assert_eq!(gs.apply(Command::Drop), ApplyOutcome::NoActivePiece);
    }

    #[test]
    fn rotate_keeps_left_and_rejects_past_wall() {
        let mut gs = game(12);
        gs.spawn(PieceKind::Straight);
        // Stand the straight up and push it against the right wall.
        assert!(gs.try_rotate(true));
        while gs.try_move(1) {}
        assert_eq!(gs.active().unwrap().left, 10);

        let before = gs.active().cloned();
        assert!(matches!(gs.apply(Command::RotateRight), ApplyOutcome::Unchanged(_)));
        assert_eq!(gs.active().cloned(), before);
        assert!(matches!(gs.apply(Command::RotateLeft), ApplyOutcome::Unchanged(_)));
        assert_eq!(gs.active().cloned(), before);
    }

    #[test]
    fn rotate_commands_produce_exact_matrices() {
        let mut gs = game(12);
        gs.spawn(PieceKind::LShape);
        match gs.apply(Command::RotateLeft) {
            ApplyOutcome::Moved(p) => {
                assert_eq!(p.shape, Shape::from_rows(&[[0u8, 0, 1], [1, 1, 1]]).unwrap());
            }
            other => panic!("unexpected outcome: {other:?}"),
        }

        gs.spawn(PieceKind::LShape);
        match gs.apply(Command::RotateRight) {
            ApplyOutcome::Moved(p) => {
                assert_eq!(p.shape, Shape::from_rows(&[[1u8, 1, 1], [1, 0, 0]]).unwrap());
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn rotate_ignores_settled_cells() {
        let mut gs = game(12);
        // Fill column 4 from row 3 down with upright straights.
        for expected in [11, 7] {
            gs.spawn(PieceKind::Straight);
            assert!(matches!(gs.apply(Command::RotateRight), ApplyOutcome::Moved(_)));
            assert_eq!(gs.apply(Command::Drop), ApplyOutcome::Committed { row: expected });
        }
        // Standing up again over the filled column is still accepted.
        gs.spawn(PieceKind::Straight);
        assert!(matches!(
            gs.apply(Command::RotateRight),
            ApplyOutcome::Moved(p) if p.shape.height() == 4
        ));
        assert!(matches!(
            gs.apply(Command::RotateLeft),
            ApplyOutcome::Moved(p) if p.shape.height() == 1
        ));
    }

    #[test]
    fn drop_clears_active_piece() {
        let mut gs = game(12);
        gs.spawn(PieceKind::Square);
        assert_eq!(gs.apply(Command::Drop), ApplyOutcome::Committed { row: 11 });
        assert!(gs.active().is_none());
        assert_eq!(gs.pieces_committed(), 1);
    }

    #[test]
    fn game_over_is_terminal() {
        let mut gs = game(6);
        gs.spawn(PieceKind::Straight);
        assert!(gs.try_rotate(true));
        assert_eq!(gs.apply(Command::Drop), ApplyOutcome::Committed { row: 5 });

        gs.spawn(PieceKind::Straight);
        assert!(gs.try_rotate(true));
        assert_eq!(gs.apply(Command::Drop), ApplyOutcome::GameOver);
        assert!(gs.game_over());
        assert!(gs.next_piece().is_none());
        assert_eq!(gs.apply(Command::MoveLeft), ApplyOutcome::GameOver);
    }

    #[test]
    fn same_seed_same_pieces() {
        let mut a = game(12);
        let mut b = game(12);
        for _ in 0..20 {
            assert_eq!(a.next_piece(), b.next_piece());
        }
    }
}
