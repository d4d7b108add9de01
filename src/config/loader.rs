use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, MAX_ARGFILE_SIZE};

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
    /// Uses `~/.config/launchargs/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("launchargs").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
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
    /// - The chunk size is at least one byte
    /// - The argfile size limit is within `1..=0x7FFFFFFF`
    /// - The environment variable name is not empty
    /// - The expansion-disable flag is a dash option
    pub fn validate(&self) -> Result<(), ConfigError> {
        let launcher = &self.launcher;

        if launcher.chunk_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "chunk_size must be at least 1".to_string(),
            });
        }

        if launcher.max_argfile_size == 0 || launcher.max_argfile_size > MAX_ARGFILE_SIZE {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "max_argfile_size must be between 1 and {}",
                    MAX_ARGFILE_SIZE
                ),
            });
        }

        if launcher.env_var.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "env_var must not be empty".to_string(),
            });
        }

        let flag = &self.options.disable_argfiles_flag;
        if !flag.starts_with('-') {
            return Err(ConfigError::ValidationError {
                message: format!("disable_argfiles_flag '{}' must start with '-'", flag),
            });
        }

        Ok(())
    }
}
