//! Configuration management for the workweek CLI
//!
//! Configuration comes from environment variables or a TOML file, and the
//! command line can override the schedule path.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where the schedule document lives
    pub store: StoreConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Editing behavior
    #[serde(default)]
    pub editor: EditorConfig,
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the schedule JSON document
    pub path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

/// Editing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Refuse to save schedules that fail validation
    pub validate_on_save: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            validate_on_save: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let path = std::env::var("WORKWEEK_SCHEDULE_PATH")
            .unwrap_or_else(|_| String::from("schedule.json"))
            .into();

        let level = std::env::var("WORKWEEK_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));

        let format = std::env::var("WORKWEEK_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        let validate_on_save = match std::env::var("WORKWEEK_VALIDATE_ON_SAVE") {
            Ok(value) => value
                .parse::<bool>()
                .with_context(|| format!("WORKWEEK_VALIDATE_ON_SAVE must be true or false, got '{value}'"))?,
            Err(_) => true,
        };

        Ok(Self {
            store: StoreConfig { path },
            logging: LoggingConfig { level, format },
            editor: EditorConfig { validate_on_save },
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.store.path.as_os_str().is_empty() {
            anyhow::bail!("store.path must not be empty");
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            anyhow::bail!(
                "logging.format must be 'text' or 'json', got '{}'",
                self.logging.format
            );
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig {
                path: PathBuf::from("schedule.json"),
            },
            logging: LoggingConfig {
                level: String::from("info"),
                format: String::from("text"),
            },
            editor: EditorConfig::default(),
        }
    }
}
