//! Game configuration surface

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    types::{Color, MAX_AI_LEVEL, MIN_BOARD_SIZE, PlayerKind},
};

/// Configuration consumed by the core at game start.
///
/// # Examples
///
/// ```
/// use corral::app::GameConfig;
/// use corral::types::PlayerKind;
///
/// let config = GameConfig::default()
///     .with_white_player(PlayerKind::Ai)
///     .with_white_ai_level(3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board edge length.
    pub board_size: usize,
    /// Who controls Black.
    pub black_player: PlayerKind,
    /// Who controls White.
    pub white_player: PlayerKind,
    /// Search level for Black when AI-controlled.
    pub black_ai_level: u8,
    /// Search level for White when AI-controlled.
    pub white_ai_level: u8,
    /// Random seed for reproducibility (None uses the app default).
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    pub fn with_black_player(mut self, kind: PlayerKind) -> Self {
        self.black_player = kind;
        self
    }

    pub fn with_white_player(mut self, kind: PlayerKind) -> Self {
        self.white_player = kind;
        self
    }

    pub fn with_black_ai_level(mut self, level: u8) -> Self {
        self.black_ai_level = level;
        self
    }

    pub fn with_white_ai_level(mut self, level: u8) -> Self {
        self.white_ai_level = level;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Which kind controls `color`.
    pub fn player_kind(&self, color: Color) -> PlayerKind {
        match color {
            Color::Black => self.black_player,
            Color::White => self.white_player,
        }
    }

    /// Search level for `color`.
    pub fn ai_level(&self, color: Color) -> u8 {
        match color {
            Color::Black => self.black_ai_level,
            Color::White => self.white_ai_level,
        }
    }

    /// Check the configuration is playable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBoardSize`] or [`Error::InvalidAiLevel`].
    pub fn validate(&self) -> Result<()> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(Error::InvalidBoardSize {
                size: self.board_size,
                min: MIN_BOARD_SIZE,
            });
        }
        for level in [self.black_ai_level, self.white_ai_level] {
            if level > MAX_AI_LEVEL {
                return Err(Error::InvalidAiLevel {
                    level,
                    max: MAX_AI_LEVEL,
                });
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: crate::types::DEFAULT_BOARD_SIZE,
            black_player: PlayerKind::Human,
            white_player: PlayerKind::Ai,
            black_ai_level: 2,
            white_ai_level: 2,
            seed: None,
        }
    }
}
