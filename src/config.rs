//! Configuration file support for pv
//!
//! Supports `pv.toml` and `.pvrc.toml` configuration files, searched from the
//! working directory upward. Every key is optional; command-line flags take
//! precedence.
//!
//! Example configuration:
//! ```toml
//! # RPM release for release candidates: "numbered" (0.N) or "simple" (0)
//! rc_style = "simple"
//!
//! # Output when no variable is requested: "env" or "json"
//! format = "json"
//! ```

use crate::fields::OutputFormat;
use crate::version::RcStyle;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Maximum size for config files (1 MB)
const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

const CONFIG_NAMES: [&str; 2] = ["pv.toml", ".pvrc.toml"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error(
        "Config file too large: {} ({size} bytes, max {} MB)",
        .path.display(),
        MAX_CONFIG_FILE_SIZE / 1024 / 1024
    )]
    TooLarge { path: PathBuf, size: u64 },

    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in config file {}:\n  {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Configuration loaded from pv.toml or .pvrc.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PvConfig {
    /// RPM release rule for release candidates
    #[serde(default)]
    pub rc_style: Option<RcStyle>,

    /// Output format for the full field listing
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl PvConfig {
    /// Load configuration by searching for config files in the given directory and parents.
    ///
    /// The nearest existing file wins; if it cannot be read or parsed, that
    /// error is returned instead of continuing the search.
    pub fn discover(start_dir: &Path) -> Result<Option<(Self, PathBuf)>, ConfigError> {
        let mut current = Some(start_dir);
        while let Some(dir) = current {
            for name in &CONFIG_NAMES {
                let config_path = dir.join(name);
                if config_path.is_file() {
                    let config = Self::load_from_path_with_error(&config_path)?;
                    return Ok(Some((config, config_path)));
                }
            }
            current = dir.parent();
        }

        Ok(None)
    }

    /// Load configuration from a specific file path with detailed error messages
    pub fn load_from_path_with_error(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let metadata = std::fs::metadata(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::TooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Check if any configuration is present
    pub fn has_config(&self) -> bool {
        self.rc_style.is_some() || self.format.is_some()
    }

    /// Resolve the effective rc style: flag, then config, then default
    pub fn rc_style(&self, flag: Option<RcStyle>) -> RcStyle {
        flag.or(self.rc_style).unwrap_or_default()
    }

    /// Resolve the effective output format: flag, then config, then default
    pub fn format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.format).unwrap_or_default()
    }
}
