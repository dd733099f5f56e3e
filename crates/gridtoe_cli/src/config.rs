//! Game configuration loaded from TOML and overridden by CLI flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use gridtoe::Board;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Who the human plays against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Two humans share the terminal.
    Pvp,
    /// Human (X, moves first) against the computer (O).
    Pvc,
}

/// Settings for an interactive game.
///
/// Unset fields are prompted for (size, mode) or defaulted (seed).
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board size.
    size: Option<usize>,

    /// Opponent.
    mode: Option<Mode>,

    /// Seed for the computer's tie-breaking.
    seed: Option<u64>,

    /// Where to save the finished game.
    record: Option<PathBuf>,
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line values on top of the file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        self,
        size: Option<usize>,
        mode: Option<Mode>,
        seed: Option<u64>,
        record: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let merged = Self {
            size: size.or(self.size),
            mode: mode.or(self.mode),
            seed: seed.or(self.seed),
            record: record.or(self.record),
        };
        merged.validate()?;
        Ok(merged)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.size {
            Some(size) if !(1..=Board::MAX_SIZE).contains(&size) => Err(ConfigError::new(format!(
                "size must be between 1 and {}, got {}",
                Board::MAX_SIZE,
                size
            ))),
            _ => Ok(()),
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
