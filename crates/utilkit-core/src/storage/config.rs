//! Configuration management
//!
//! Optional defaults read from `~/.config/utilkit/config.toml`.
//! Priority: CLI argument > UTILKIT_* environment variable > config.toml > built-in default.
//!
//! The file is only ever read; utilkit does not write configuration.

use super::Result;
use crate::core::date::TOKEN_DELIMITER;
use crate::error::{ConfigError, StorageError};
use crate::utils::data::DEFAULT_DECIMALS;
use crate::utils::input::EnvConfigReader;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_DATE_FORMAT: &str = "#YYYY#-#MM#-#DD# #hhhh#:#mm#:#ss#";

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Default number of decimals for `bytes`
    pub decimals: Option<i32>,
    /// Default `#TOKEN#` format string for `date`
    pub date_format: Option<String>,
}

impl Config {
    /// Load configuration from file. A missing file yields the default config.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("no config file at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    fn load_from(config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse config file: {}", e),
            })?;

        Ok(config)
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;

        let app_config_dir = home_dir.join(".config").join("utilkit");
        Ok(app_config_dir.join(CONFIG_FILE_NAME))
    }

    /// Decimals with fallback to environment variable, then the built-in default
    pub fn get_decimals(&self) -> i32 {
        EnvConfigReader::read_decimals()
            .or(self.decimals)
            .unwrap_or(DEFAULT_DECIMALS)
    }

    /// Date format with fallback to environment variable, then the built-in default
    pub fn get_date_format(&self) -> String {
        EnvConfigReader::read_date_format()
            .or_else(|| self.date_format.clone())
            .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string())
    }

    /// Check values that parse fine but make no sense.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        match self.check_fields().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Drop every invalid value so lookups fall back to the environment or
    /// the built-in default. Returns the problems that were removed.
    pub fn sanitize(&mut self) -> Vec<ConfigError> {
        let problems = self.check_fields();
        for problem in &problems {
            if let ConfigError::InvalidValue { field, .. } = problem {
                match field.as_str() {
                    "decimals" => self.decimals = None,
                    "date_format" => self.date_format = None,
                    _ => {}
                }
            }
        }
        problems
    }

    fn check_fields(&self) -> Vec<ConfigError> {
        let mut problems = Vec::new();
        if let Some(decimals) = self.decimals {
            if !(0..=100).contains(&decimals) {
                problems.push(ConfigError::InvalidValue {
                    field: "decimals".to_string(),
                    value: decimals.to_string(),
                    reason: "must be between 0 and 100".to_string(),
                });
            }
        }
        if let Some(format) = &self.date_format {
            if !format.contains(TOKEN_DELIMITER) {
                problems.push(ConfigError::InvalidValue {
                    field: "date_format".to_string(),
                    value: format.clone(),
                    reason: format!("contains no {}TOKEN{} markers", TOKEN_DELIMITER, TOKEN_DELIMITER),
                });
            }
        }
        problems
    }
}
