//! Game configuration
//!
//! Configuration is read from a JSON file and may be overridden by CLI flags.
//!
//! ```
//! use noughts::config::GameConfig;
//!
//! let config = GameConfig::default()
//!     .with_vs_computer(false)
//!     .with_transposition_cache(false);
//! assert!(config.validate().is_ok());
//! ```

use std::{io::ErrorKind, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    tictactoe::{GameMode, Player},
};

/// Search tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Remember solved positions between nodes and moves
    pub transposition_cache: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            transposition_cache: true,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Play against the computer instead of a second human
    pub vs_computer: bool,

    /// Side the computer plays. Only O is supported.
    pub computer: Player,

    pub search: SearchConfig,

    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            vs_computer: true,
            computer: Player::O,
            search: SearchConfig::default(),
            log_filter: "warn".to_string(),
        }
    }
}

impl GameConfig {
    pub fn with_vs_computer(mut self, enabled: bool) -> Self {
        self.vs_computer = enabled;
        self
    }

    pub fn with_transposition_cache(mut self, enabled: bool) -> Self {
        self.search.transposition_cache = enabled;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Check the configuration for unsupported values
    pub fn validate(&self) -> Result<()> {
        if self.computer != Player::O {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "the computer always plays O, got computer = {}",
                    self.computer
                ),
            });
        }
        if self.log_filter.trim().is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "log_filter must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Game mode described by this configuration
    pub fn game_mode(&self) -> GameMode {
        if self.vs_computer {
            GameMode::VsComputer {
                computer: self.computer,
            }
        } else {
            GameMode::TwoPlayer
        }
    }

    /// Load and validate a JSON configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("read config file {}", path.display()), e))?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`GameConfig::load`], but a missing file yields the defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        match Self::load(path) {
            Err(Error::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Validate and write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.validate()?;
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| Error::io(format!("write config file {}", path.display()), e))
    }
}
