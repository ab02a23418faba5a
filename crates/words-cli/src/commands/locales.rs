//! Locale discovery commands.

use num_words::{Locale, rules_for, supported_locales};

/// List registered locales.
pub fn run(default_locale: Locale) {
    println!("Registered locales:");
    for &locale in supported_locales() {
        let rules = rules_for(locale);
        let marker = if locale == default_locale { " (default)" } else { "" };
        println!(
            "  {:<4} zero={:?} negative={:?} decimal={:?}{marker}",
            locale.tag(),
            rules.zero_word(),
            rules.negative,
            rules.decimal_separator,
        );
    }
}

/// Print the scale name of each power-of-1000 group for `locale`.
pub fn run_scales(locale: Locale, count: usize) {
    let scales = &rules_for(locale).scales;
    println!("Scale words ({locale}):");
    for index in 1..=count {
        println!("  10^{:<4} {}", index * 3, scales.name(index));
    }
}
