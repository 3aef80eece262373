//! Game setup configuration.
//!
//! A `GameConfig` carries everything needed to start a game:
//! - board size
//! - the two player display names
//! - an optional RNG seed for reproducible removals
//!
//! It can be built in code with the `with_*` methods or loaded from TOML.
//! Missing TOML keys fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::WIN_LENGTH;
use crate::error::{ConfigError, ConstructionError};

/// Smallest board a game will be started on.
pub const MIN_BOARD_SIZE: usize = WIN_LENGTH;

/// Board sizes offered to players by the standard setup.
pub const STANDARD_BOARD_SIZES: [usize; 3] = [6, 10, 14];

/// Largest seed a config accepts. TOML integers are signed 64-bit, so
/// larger seeds could not be written back out.
pub const MAX_SEED: u64 = i64::MAX as u64;

/// Display name used for the first seat when none is given.
pub const DEFAULT_PLAYER_ONE: &str = "Player 1";

/// Display name used for the second seat when none is given.
pub const DEFAULT_PLAYER_TWO: &str = "Player 2";

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board.
    pub board_size: usize,

    /// Display name of the first player (plays X).
    pub player_one: String,

    /// Display name of the second player (plays O).
    pub player_two: String,

    /// RNG seed. `None` seeds from entropy. Must not exceed `MAX_SEED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: STANDARD_BOARD_SIZES[0],
            player_one: DEFAULT_PLAYER_ONE.to_string(),
            player_two: DEFAULT_PLAYER_TWO.to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a board of the given size.
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    /// Set both player names.
    #[must_use]
    pub fn with_names(mut self, player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        self.player_one = player_one.into();
        self.player_two = player_two.into();
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace blank names with "Player 1" / "Player 2".
    #[must_use]
    pub fn with_default_names(mut self) -> Self {
        if self.player_one.trim().is_empty() {
            self.player_one = DEFAULT_PLAYER_ONE.to_string();
        }
        if self.player_two.trim().is_empty() {
            self.player_two = DEFAULT_PLAYER_TWO.to_string();
        }
        self
    }

    /// Parse configuration from a TOML string and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConstructionError::BoardTooSmall {
                size: self.board_size,
                min: MIN_BOARD_SIZE,
            }
            .into());
        }
        if self.player_one.trim().is_empty() || self.player_two.trim().is_empty() {
            return Err(ConfigError::Validation(
                "player names must not be blank".into(),
            ));
        }
        if let Some(seed) = self.seed.filter(|&seed| seed > MAX_SEED) {
            return Err(ConfigError::Validation(format!(
                "seed {seed} exceeds the TOML integer range (max {MAX_SEED})"
            )));
        }
        Ok(())
    }

    /// Render the default configuration as TOML.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&GameConfig::default())
    }
}
