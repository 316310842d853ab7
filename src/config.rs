//! Resize configuration: the element-kind table, loadable from JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::kinds::KindTable;

/// Environment variable naming a JSON config file.
pub const CONFIG_PATH_ENV: &str = "STORY_RESIZE_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "E_CONFIG_IO",
            Self::Parse(_) => "E_CONFIG_PARSE",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeConfig {
    /// Element kind table. The built-in story kinds when absent.
    #[serde(default)]
    pub kinds: KindTable,
}

impl ResizeConfig {
    /// Parse a config document.
    ///
    /// # Errors
    ///
    /// Returns `Parse` if `raw` is not a valid config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read and `Parse` if it is malformed.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw =
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_json_str(&raw)
    }

    /// Load from the file named by `STORY_RESIZE_CONFIG`, or the defaults
    /// when the variable is unset.
    ///
    /// # Errors
    ///
    /// Propagates `from_path` errors for the named file.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_path(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
