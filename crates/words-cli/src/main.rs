//! numwords command-line interface.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use words_core::{Locale, WordsConfig};

mod commands;
mod logging;

/// Spell numbers as words (Vietnamese, English)
#[derive(Debug, Parser)]
#[command(name = "numwords")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (overrides the config file)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Log format (overrides the config file)
    #[arg(long, global = true)]
    log_format: Option<logging::LogFormat>,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Spell a single number
    Convert {
        /// Number to spell, e.g. 1050, -12.5, 123456789012345678901234
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Locale tag (vi or en)
        #[arg(long)]
        locale: Option<String>,
    },

    /// Spell every number found in a piece of text
    Text {
        /// Input text
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Locale tag (vi or en)
        #[arg(long)]
        locale: Option<String>,
    },

    /// List registered locales
    Locales,

    /// Show the scale words of a locale
    Scales {
        /// Locale tag (vi or en)
        #[arg(long)]
        locale: Option<String>,

        /// Number of power-of-1000 groups to list
        #[arg(short = 'n', long, default_value = "8")]
        count: usize,
    },

    /// Show version and build info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => WordsConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => WordsConfig::default(),
    };

    logging::LogSettings::resolve(&config.logging, cli.log_level.as_deref(), cli.log_format)?
        .init()?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting numwords CLI");
    debug!(default_locale = %config.default_locale, "configuration loaded");

    let resolve = |tag: Option<String>| -> Result<Locale> {
        match tag {
            Some(tag) => Ok(tag.parse()?),
            None => Ok(config.default_locale),
        }
    };

    match cli.command {
        Commands::Convert { value, locale } => {
            let locale = resolve(locale)?;
            commands::convert::run(&value, locale).context("conversion failed")?;
        }
        Commands::Text { input, locale } => {
            let locale = resolve(locale)?;
            commands::text::run(&input, locale).context("text spelling failed")?;
        }
        Commands::Locales => {
            commands::locales::run(config.default_locale);
        }
        Commands::Scales { locale, count } => {
            let locale = resolve(locale)?;
            commands::locales::run_scales(locale, count);
        }
        Commands::Info => {
            commands::info::run();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_values_are_not_flags() {
        let cli = Cli::try_parse_from(["numwords", "text", "-5 độ"]).unwrap();
        match cli.command {
            Commands::Text { input, locale } => {
                assert_eq!(input, "-5 độ");
                assert!(locale.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::try_parse_from(["numwords", "convert", "-12.5", "--locale", "en"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Convert { ref value, .. } if value == "-12.5"
        ));
    }

    #[test]
    fn test_log_format_flag() {
        let cli = Cli::try_parse_from(["numwords", "--log-format", "json", "info"]).unwrap();
        assert_eq!(cli.log_format, Some(logging::LogFormat::Json));
    }
}
