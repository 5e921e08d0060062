use std::path::{Path, PathBuf};
use std::time::Duration;

use godist_schema::Platform;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{DEFAULT_FEED_URL, DEFAULT_TIMEOUT_SECS};

/// Errors that can occur while loading `config.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unknown keys.
    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// TOML decode error.
        source: toml::de::Error,
    },
}

/// Settings from `~/.godist/config.toml`. Every key is optional.
///
/// ```toml
/// feed_url = "https://golang.org/dl/?mode=json&include=all"
/// os = "linux"
/// arch = "amd64"
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Feed location overriding [`DEFAULT_FEED_URL`].
    pub feed_url: Option<String>,
    /// Default target OS instead of the host's.
    pub os: Option<String>,
    /// Default target architecture instead of the host's.
    pub arch: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load the user's config file, falling back to defaults if there is none.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        match crate::paths::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load a specific config file; a missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Feed URL to use when none is given on the command line or environment.
    pub fn feed_url(&self) -> &str {
        self.feed_url.as_deref().unwrap_or(DEFAULT_FEED_URL)
    }

    /// Target platform: configured halves, host values for the rest.
    pub fn platform(&self) -> Platform {
        let mut platform = Platform::current();
        if let Some(os) = &self.os {
            platform = platform.with_os(os.clone());
        }
        if let Some(arch) = &self.arch {
            platform = platform.with_arch(arch.clone());
        }
        platform
    }

    /// Whole-request timeout for feed downloads.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
