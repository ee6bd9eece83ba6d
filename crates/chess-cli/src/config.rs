//! Configuration file loading for the terminal game.
//!
//! Settings are read from a TOML file, `chess.toml` in the current directory
//! unless another path is given. A missing file means all defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "chess.toml";

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Settings for a terminal session.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Where `save` writes the game and `--load` reads it.
    /// Defaults to "chess_save.json".
    #[serde(default = "default_save_path")]
    pub save_path: PathBuf,
    /// Draw pieces as Unicode glyphs rather than letters. Defaults to true.
    #[serde(default = "default_unicode")]
    pub unicode: bool,
    /// Log filter used when `RUST_LOG` is not set. Defaults to "warn".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_save_path() -> PathBuf {
    PathBuf::from("chess_save.json")
}

fn default_unicode() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            save_path: default_save_path(),
            unicode: default_unicode(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Loads the configuration from `path`.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }
}
