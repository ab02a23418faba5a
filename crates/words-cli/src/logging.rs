//! Log subscriber setup for the CLI.
//!
//! Settings come from the `logging` section of the config file, overridden
//! by `--log-level` / `--log-format`. Output goes to stderr so spelled text on
//! stdout can be piped.

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};
use words_core::LoggingConfig;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    #[value(alias = "pretty")]
    Text,
    /// One JSON object per event.
    Json,
}

/// Effective logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// Merge command-line overrides into the configured values.
    pub fn resolve(
        config: &LoggingConfig,
        level: Option<&str>,
        format: Option<LogFormat>,
    ) -> Result<Self> {
        let format = match format {
            Some(format) => format,
            None => <LogFormat as ValueEnum>::from_str(&config.format, true)
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("invalid logging.format {:?}", config.format))?,
        };

        Ok(Self {
            level: level.unwrap_or(&config.level).to_string(),
            format,
        })
    }

    /// Install the global subscriber. `RUST_LOG` wins over `level`.
    pub fn init(&self) -> Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .with_context(|| format!("invalid log level {:?}", self.level))?;

        let output = fmt::layer().with_writer(std::io::stderr).with_target(true);
        let output = match self.format {
            LogFormat::Text => output.compact().boxed(),
            LogFormat::Json => output.json().flatten_event(true).boxed(),
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(output)
            .try_init()
            .context("a global logger is already installed")
    }
}
