use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::root::SliceName;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub persist: PersistConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// Development vs production.
///
/// Production drops the logger and performance middleware and quiets
/// non-fatal diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// Mode implied by the build profile: debug builds are development.
    pub fn from_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSection {
    /// Overrides the build-profile mode when set.
    #[serde(default)]
    pub mode: Option<BuildMode>,
}

/// Durable record settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistConfig {
    /// Storage key of the record (default: "root").
    #[serde(default = "default_persist_key")]
    pub key: String,
    /// Schema version; a record with any other version is discarded (default: 1).
    #[serde(default = "default_persist_version")]
    pub version: u32,
    /// Slices written to storage (default: auth, app).
    #[serde(default = "default_whitelist")]
    pub whitelist: Vec<SliceName>,
    /// Directory for file storage. Falls back to the platform data dir.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Development diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Actions slower than this are logged at warn level (default: 16).
    #[serde(default = "default_slow_action_ms")]
    pub slow_action_ms: u64,
    /// Entries kept by the action logger (default: 100).
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,
}

fn default_persist_key() -> String {
    "root".to_string()
}

fn default_persist_version() -> u32 {
    1
}

fn default_whitelist() -> Vec<SliceName> {
    vec![SliceName::Auth, SliceName::App]
}

fn default_slow_action_ms() -> u64 {
    16
}

fn default_log_capacity() -> usize {
    100
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self {
            key: default_persist_key(),
            version: default_persist_version(),
            whitelist: default_whitelist(),
            dir: None,
        }
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            slow_action_ms: default_slow_action_ms(),
            log_capacity: default_log_capacity(),
        }
    }
}

impl Config {
    /// Effective build mode.
    pub fn mode(&self) -> BuildMode {
        self.store.mode.unwrap_or_else(BuildMode::from_build)
    }
}
