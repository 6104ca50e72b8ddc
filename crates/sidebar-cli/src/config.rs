//! Replay configuration file
//!
//! ```toml
//! [unlock]
//! layout = "single-column"
//! cache_capacity = 4
//! is_confirmed = true
//!
//! [session]
//! HL = "en"
//! XSRF_TOKEN = "token"
//! ```

use serde::{Deserialize, Serialize};
use sidebar_strategy::StaticSessionContext;
use sidebar_unlock::UnlockConfig;
use std::path::{Path, PathBuf};

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read config '{path}': {source}")]
    Io {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for [`CliConfig`]
    #[error("invalid config '{path}': {source}")]
    Parse {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of a replay configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Orchestrator settings
    pub unlock: UnlockConfig,
    /// Host configuration values keyed by their page names
    pub session: StaticSessionContext,
}

impl CliConfig {
    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns [`toml::de::Error`] on malformed input.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load from a file
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file is unreadable or malformed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
