//! Text command implementation.

use anyhow::Result;
use num_words::{Locale, TextSpeller};

/// Run the text command.
pub fn run(input: &str, locale: Locale) -> Result<()> {
    let speller = TextSpeller::new().with_default_locale(locale);
    let result = speller.spell(input, None)?;

    println!("Input:   {input}");
    println!("Spelled: {result}");
    println!("Locale:  {locale}");

    Ok(())
}
