//! Engine configuration.

use crate::error::ConfigError;
use crate::types::{DEFAULT_BOARD_SIZE, MIN_BOARD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Side length of the square board, walls included.
    pub board_size: usize,
    /// Seed for the piece RNG; a random seed is drawn when `None`.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject boards that cannot host every shape between the walls.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall {
                size: self.board_size,
                min: MIN_BOARD_SIZE,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
        assert_eq!(GameConfig::default().board_size, 12);
    }

    #[test]
    fn small_board_is_rejected() {
        let err = GameConfig::new(5).validate().unwrap_err();
        assert_eq!(err, ConfigError::BoardTooSmall { size: 5, min: 6 });
        assert_eq!(err.to_string(), "board size 5 is too small, need at least 6");
        assert_eq!(GameConfig::new(6).validate(), Ok(()));
    }
}
