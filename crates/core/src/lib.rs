//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the piece/board geometry engine: shape templates,
//! rotation algebra, horizontal validation, resting-row search and commit.
//! It has **zero dependencies** on terminal rendering or input, making it:
//!
//! - **Deterministic**: Same seed produces the same piece sequence
//! - **Testable**: Every rule is a pure function or a method on an owned state
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`board`]: square grid with permanent walls, overlap probing and overlay
//! - [`pieces`]: the [`Shape`] matrix and the five piece templates
//! - [`geometry`]: occupied width and quarter-turn rotations
//! - [`place`]: horizontal validator, resting-row search and commit
//! - [`rng`]: seedable uniform shape catalog
//! - [`game_state`]: the active piece controller and the engine facade
//! - [`snapshot`]: read-only views handed to renderers
//!
//! # Game Rules
//!
//! - A new piece spawns horizontally centered above the board.
//! - Moves and rotations are checked only against the walls; settled cells
//!   are not consulted until the piece is dropped.
//! - A drop searches bottom-up for the first band of rows where the piece
//!   overlaps nothing and commits it there.
//! - When no band fits, the game is over.
//!
//! # Example
//!
//! ```
//! use walltris_core::{ApplyOutcome, GameConfig, GameState};
//! use walltris_types::{Command, PieceKind};
//!
//! let mut game = GameState::new(GameConfig::default().with_seed(7)).unwrap();
//! let piece = game.spawn(PieceKind::Square).unwrap();
//! assert_eq!(piece.left, 5);
//!
//! assert!(matches!(game.apply(Command::Drop), ApplyOutcome::Committed { row: 11 }));
//! assert_eq!(game.board().get(5, 10), Some(1));
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod geometry;
pub mod pieces;
pub mod place;
pub mod rng;
pub mod snapshot;

pub use walltris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use error::{ConfigError, ShapeError};
pub use game_state::{ActivePiece, ApplyOutcome, GameState};
pub use geometry::{rotate_clockwise, rotate_counter_clockwise, width};
pub use pieces::{get_shape, Shape};
pub use place::{can_place_at, commit, drop_shape, find_resting_row, PlaceError};
pub use rng::{PieceRng, ShapeCatalog};
pub use snapshot::{ActiveSnapshot, BoardSnapshot, GameSnapshot};
