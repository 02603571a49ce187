//! Match configuration loaded from TOML.

use crate::games::markers::Board;
use crate::roster::PlayerNames;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a match.
///
/// Board size is the only rule parameter; the rest is presentation.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Display name for the first player.
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Display name for the second player.
    #[serde(default = "default_player_two")]
    player_two: String,

    /// File the terminal UI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_board_size() -> usize {
    4
}

fn default_player_one() -> String {
    "Player 1".to_string()
}

fn default_player_two() -> String {
    "Player 2".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_markers.log")
}

impl GameConfig {
    /// Creates a configuration with default names for the given board size.
    #[instrument]
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the board size when an override is given.
    #[instrument(skip(self))]
    pub fn with_board_size(mut self, board_size: Option<usize>) -> Result<Self, ConfigError> {
        if let Some(size) = board_size {
            info!(size, "Overriding board size");
            self.board_size = size;
        }
        self.validate()?;
        Ok(self)
    }

    /// Rejects settings no match can be built from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::new(
                "board_size must be at least 1".to_string(),
            ));
        }
        if self.board_size > Board::MAX_SIZE {
            return Err(ConfigError::new(format!(
                "board_size must be at most {} (got {})",
                Board::MAX_SIZE,
                self.board_size
            )));
        }
        Ok(())
    }

    /// Display names for both seats.
    pub fn player_names(&self) -> PlayerNames {
        PlayerNames::new(self.player_one.clone(), self.player_two.clone())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            player_one: default_player_one(),
            player_two: default_player_two(),
            log_file: default_log_file(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
