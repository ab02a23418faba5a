//! Convert command implementation.

use anyhow::{Result, anyhow};
use num_words::{ConvertOptions, Locale};
use tracing::debug;

/// Run the convert command.
pub fn run(value: &str, locale: Locale) -> Result<()> {
    let words = spell(value, locale)?;
    println!("{words}");
    Ok(())
}

/// Spell `value`, tagging bad input with the offending text.
fn spell(value: &str, locale: Locale) -> Result<String> {
    let words = num_words::convert(value, ConvertOptions::with_locale(locale)).map_err(|e| {
        if e.is_input_error() {
            anyhow!(e).context(format!("cannot spell {value:?}"))
        } else {
            e.into()
        }
    })?;
    debug!(%locale, input_len = value.len(), output_len = words.len(), "converted");
    Ok(words)
}
