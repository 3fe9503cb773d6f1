//! Play configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct PlayConfig {
    /// Seed for the opponent's random tier. Entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Pause before the opponent answers a human move.
    #[serde(default = "default_opponent_delay_ms")]
    opponent_delay_ms: u64,

    /// Pause before the opponent opens a game.
    #[serde(default = "default_opening_delay_ms")]
    opening_delay_ms: u64,

    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_opponent_delay_ms() -> u64 {
    700
}

fn default_opening_delay_ms() -> u64 {
    500
}

fn default_log_filter() -> String {
    "warn,noughts=info".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            seed: None,
            opponent_delay_ms: default_opponent_delay_ms(),
            opening_delay_ms: default_opening_delay_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(?config, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = PlayConfig::from_toml("").unwrap();
        assert_eq!(config, PlayConfig::default());
        assert_eq!(*config.opponent_delay_ms(), 700);
        assert_eq!(*config.opening_delay_ms(), 500);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = PlayConfig::from_toml("seed = 9\nopponent_delay_ms = 0\n").unwrap();
        assert_eq!(*config.seed(), Some(9));
        assert_eq!(*config.opponent_delay_ms(), 0);
        assert_eq!(*config.opening_delay_ms(), 500);
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = PlayConfig::from_toml("seed = \"nine\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_setters_override() {
        let config = PlayConfig::default().with_seed(Some(3)).with_opening_delay_ms(0);
        assert_eq!(*config.seed(), Some(3));
        assert_eq!(*config.opening_delay_ms(), 0);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = PlayConfig::load_or_default("does/not/exist.toml").unwrap();
        assert_eq!(config, PlayConfig::default());
    }
}
