//! Arcade configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings shared by every arcade command.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArcadeConfig {
    /// Directory holding persisted key-value records (scores).
    #[serde(default = "default_scores_dir")]
    scores_dir: PathBuf,

    /// Log file used by the interactive terminal modes.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Fallback tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Delay before a calculator error message clears itself (0 disables).
    #[serde(default = "default_error_clear_ms")]
    error_clear_ms: u64,
}

#[instrument]
fn default_scores_dir() -> PathBuf {
    PathBuf::from(".strictly_arcade")
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_arcade.log")
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

#[instrument]
fn default_error_clear_ms() -> u64 {
    2000
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            scores_dir: default_scores_dir(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            error_clear_ms: default_error_clear_ms(),
        }
    }
}

impl ArcadeConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(scores_dir = %config.scores_dir.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if one is given, otherwise returns the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Error auto-clear delay, or `None` when disabled.
    pub fn error_clear_delay(&self) -> Option<Duration> {
        (self.error_clear_ms > 0).then(|| Duration::from_millis(self.error_clear_ms))
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
