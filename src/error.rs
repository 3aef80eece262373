use std::path::PathBuf;

use crate::core::Symbol;

/// Errors returned when a placement is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell ({row}, {col}) is already occupied")]
    OccupiedCell { row: usize, col: usize },

    #[error("coordinate ({row}, {col}) is outside a {size}x{size} board")]
    InvalidCoordinate { row: usize, col: usize, size: usize },

    #[error("the game is already over")]
    GameOver,
}

impl MoveError {
    /// True for mistakes a player makes in normal play, where the caller
    /// simply asks for another move.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, MoveError::OccupiedCell { .. })
    }
}

/// Errors raised while building a board or seating players.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    #[error("board size {size} is too small (minimum {min})")]
    BoardTooSmall { size: usize, min: usize },

    #[error("board size {size} is too large to allocate")]
    BoardTooLarge { size: usize },

    #[error("both players were assigned symbol {0}")]
    DuplicateSymbol(Symbol),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("invalid game setup: {0}")]
    Construction(#[from] ConstructionError),
}
