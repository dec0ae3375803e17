//! Game configuration
//!
//! Loaded from an optional TOML file; command-line flags override it.
//!
//! ```toml
//! slots = 5
//! miss_policy = "clear"
//! seed = 42
//! show_history = false
//! ```

use crate::core::Palette;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// What happens to the board after a full but wrong guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissPolicy {
    /// Leave the guess on the board for in-place adjustment
    #[default]
    Keep,
    /// Empty the board
    Clear,
}

/// Session settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Initial palette size (and slot count)
    pub slots: usize,
    pub miss_policy: MissPolicy,
    /// Fixed RNG seed for reproducible answers
    pub seed: Option<u64>,
    pub show_history: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("slots must be between {} and {}, got {0}", Palette::MIN, Palette::MAX)]
    SlotsOutOfRange(usize),
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            slots: Palette::DEFAULT_SIZE,
            miss_policy: MissPolicy::Keep,
            seed: None,
            show_history: true,
        }
    }
}

impl GameConfig {
    /// Read and validate a TOML config file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file can't be read, doesn't parse, or
    /// holds out-of-range values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parse and validate TOML text
    ///
    /// # Errors
    /// Returns `ConfigError` on malformed TOML or out-of-range values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// Returns `ConfigError::SlotsOutOfRange` when `slots` is outside the
    /// palette bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(Palette::MIN..=Palette::MAX).contains(&self.slots) {
            return Err(ConfigError::SlotsOutOfRange(self.slots));
        }
        Ok(())
    }
}
