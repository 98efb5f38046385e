use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::persist::is_valid_key;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/frontstate/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("frontstate").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The persistence key is not empty and is usable as a file name
    /// - The schema version is at least 1
    /// - No slice is whitelisted twice
    /// - The action log keeps at least one entry
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.persist.key.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "persist.key must not be empty".to_string(),
            });
        }

        if !is_valid_key(&self.persist.key) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "persist.key '{}' may only contain ASCII letters, digits, '-', '_' and '.'",
                    self.persist.key
                ),
            });
        }

        if self.persist.version == 0 {
            return Err(ConfigError::ValidationError {
                message: "persist.version must be at least 1".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for name in &self.persist.whitelist {
            if !seen.insert(*name) {
                return Err(ConfigError::ValidationError {
                    message: format!("Slice '{}' is whitelisted more than once", name),
                });
            }
        }

        if self.diagnostics.log_capacity == 0 {
            return Err(ConfigError::ValidationError {
                message: "diagnostics.log_capacity must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
