//! File-based configuration for the command-line front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Top-level configuration, read from TOML.
///
/// Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct KataConfig {
    /// `tracing` filter used when `RUST_LOG` is unset.
    log_filter: String,

    /// Defaults for the `fizzbuzz` command.
    fizzbuzz: FizzBuzzConfig,
}

/// Range played by the `fizzbuzz` command.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct FizzBuzzConfig {
    /// First number of the round.
    start: i64,

    /// Last number of the round (inclusive).
    end: i64,
}

impl Default for KataConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            fizzbuzz: FizzBuzzConfig::default(),
        }
    }
}

impl Default for FizzBuzzConfig {
    fn default() -> Self {
        Self { start: 1, end: 100 }
    }
}

impl KataConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(start = config.fizzbuzz.start, end = config.fizzbuzz.end, "Config loaded");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolves the `fizzbuzz` range, letting command-line flags win.
    pub fn fizzbuzz_range(&self, start: Option<i64>, end: Option<i64>) -> (i64, i64) {
        (
            start.unwrap_or(self.fizzbuzz.start),
            end.unwrap_or(self.fizzbuzz.end),
        )
    }

    #[track_caller]
    fn validate(&self) -> Result<(), ConfigError> {
        if self.fizzbuzz.start > self.fizzbuzz.end {
            return Err(ConfigError::new(format!(
                "fizzbuzz.start ({}) must not exceed fizzbuzz.end ({})",
                self.fizzbuzz.start, self.fizzbuzz.end
            )));
        }
        Ok(())
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
