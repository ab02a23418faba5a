//! # num-words
//!
//! Locale-aware conversion of numbers to words.
//!
//! Inputs may be machine floats, decimal strings or arbitrary-precision
//! integers. The value is decomposed into sign, integer digits and
//! fractional digits, the integer part is spelled cluster by cluster with
//! locale-specific rules, and the fraction is read digit by digit.
//!
//! Supported locales:
//! - Vietnamese (`vi`, default): `1005` → `một nghìn không trăm lẻ năm`
//! - English (`en`): `-123` → `negative one hundred twenty-three`
//!
//! # Example
//!
//! ```
//! use num_words::{convert, convert_english, ConvertOptions, Locale};
//!
//! assert_eq!(convert(15, ConvertOptions::default()).unwrap(), "mười lăm");
//! assert_eq!(convert_english(3.14).unwrap(), "three point one four");
//! assert_eq!(
//!     convert("21", ConvertOptions::with_locale(Locale::Vi)).unwrap(),
//!     "hai mươi mốt"
//! );
//! ```

mod assemble;
mod cluster;
mod locale;
mod normalize;
mod scale;
pub mod text;

use tracing::instrument;

pub use locale::{LocaleRules, TensJoiner};
pub use scale::ScaleTable;
pub use text::{Rule, TextSpeller};
pub use words_core::{ConvertOptions, Locale, NumericInput, WordsError, WordsResult};

/// Rule set registered for `locale`.
pub fn rules_for(locale: Locale) -> &'static LocaleRules {
    match locale {
        Locale::Vi => &locale::VIETNAMESE,
        Locale::En => &locale::ENGLISH,
    }
}

/// All registered locales, default first.
pub fn supported_locales() -> &'static [Locale] {
    &Locale::ALL
}

/// Convert `value` to words using the locale in `options`.
pub fn convert(value: impl Into<NumericInput>, options: ConvertOptions) -> WordsResult<String> {
    spell(&value.into(), options.resolved_locale())
}

/// Convert `value` to words, selecting the locale by its tag (`"vi"`, `"en"`).
pub fn convert_tagged(value: impl Into<NumericInput>, tag: &str) -> WordsResult<String> {
    let locale: Locale = tag.parse()?;
    spell(&value.into(), locale)
}

/// Convert `value` to English words.
pub fn convert_english(value: impl Into<NumericInput>) -> WordsResult<String> {
    spell(&value.into(), Locale::En)
}

/// Convert `value` to Vietnamese words.
pub fn convert_vietnamese(value: impl Into<NumericInput>) -> WordsResult<String> {
    spell(&value.into(), Locale::Vi)
}

#[instrument(level = "trace", skip_all, fields(locale = %locale))]
fn spell(value: &NumericInput, locale: Locale) -> WordsResult<String> {
    let magnitude = normalize::normalize(value)?;
    Ok(assemble::assemble(&magnitude, rules_for(locale)))
}
