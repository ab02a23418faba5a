//! Configuration structures for the converter and its front ends.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{WordsError, WordsResult};
use crate::types::Locale;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordsConfig {
    /// Locale used when a call does not name one.
    #[serde(default)]
    pub default_locale: Locale,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl WordsConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> WordsResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| WordsError::config(format!("{}: {e}", path.display())))
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(content: &str) -> WordsResult<Self> {
        serde_json::from_str(content).map_err(|e| WordsError::config(e.to_string()))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format (json or text).
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
