//! Core data types for number conversion.

use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Serialize};

use crate::error::{WordsError, WordsResult};

/// Supported output locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Vietnamese.
    #[default]
    Vi,
    /// English.
    En,
}

impl Locale {
    /// Every registered locale, default first.
    pub const ALL: [Locale; 2] = [Locale::Vi, Locale::En];

    /// Short tag used on the command line and in configuration files.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::Vi => "vi",
            Locale::En => "en",
        }
    }

    /// Tags of all registered locales.
    pub fn tags() -> Vec<&'static str> {
        Self::ALL.iter().map(|l| l.tag()).collect()
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Locale {
    type Err = WordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.tag().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| WordsError::UnsupportedLocale {
                requested: s.to_string(),
                supported: Self::tags(),
            })
    }
}

/// A value accepted by the converter.
///
/// Integer primitives are routed through [`BigInt`] so they never lose
/// precision on the way in.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput {
    /// Machine floating-point number.
    Number(f64),
    /// Decimal string such as `"-12.50"`.
    Text(String),
    /// Arbitrary-precision integer.
    BigInt(BigInt),
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Finite `f32` values keep their own shortest decimal form; widening to
/// `f64` first would expose binary digits (`0.1f32` is `0.10000000149...`).
impl From<f32> for NumericInput {
    fn from(value: f32) -> Self {
        if value.is_finite() {
            Self::Text(value.to_string())
        } else {
            Self::Number(f64::from(value))
        }
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<BigInt> for NumericInput {
    fn from(value: BigInt) -> Self {
        Self::BigInt(value)
    }
}

impl From<BigUint> for NumericInput {
    fn from(value: BigUint) -> Self {
        Self::BigInt(BigInt::from(value))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumericInput {
                fn from(value: $t) -> Self {
                    Self::BigInt(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// A validated number split into sign, integer digits and fractional digits.
///
/// Digits are stored as values `0..=9`, most significant first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedMagnitude {
    negative: bool,
    integer_digits: Vec<u8>,
    fractional_digits: Vec<u8>,
}

impl SignedMagnitude {
    /// Build a magnitude, stripping leading integer zeros and dropping the
    /// sign of an all-zero value.
    ///
    /// Fails with [`WordsError::InvalidFormat`] if any digit is above 9.
    pub fn new(
        negative: bool,
        integer_digits: Vec<u8>,
        fractional_digits: Vec<u8>,
    ) -> WordsResult<Self> {
        if integer_digits.iter().chain(&fractional_digits).any(|&d| d > 9) {
            let raw: Vec<String> = integer_digits
                .iter()
                .chain(&fractional_digits)
                .map(|d| d.to_string())
                .collect();
            return Err(WordsError::invalid_format(raw.join(",")));
        }

        let first_nonzero = integer_digits.iter().position(|&d| d != 0);
        let integer_digits = match first_nonzero {
            Some(idx) => integer_digits[idx..].to_vec(),
            None => vec![0],
        };

        let mut magnitude = Self {
            negative,
            integer_digits,
            fractional_digits,
        };
        if magnitude.is_zero() {
            magnitude.negative = false;
        }
        Ok(magnitude)
    }

    /// Whether the value is below zero. Never set for a zero magnitude.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Integer part without leading zeros; `[0]` for zero.
    pub fn integer_digits(&self) -> &[u8] {
        &self.integer_digits
    }

    /// Fractional part read literally; empty when there is no decimal point.
    pub fn fractional_digits(&self) -> &[u8] {
        &self.fractional_digits
    }

    /// True when the integer part is exactly zero.
    pub fn integer_is_zero(&self) -> bool {
        self.integer_digits == [0]
    }

    /// True when every digit, integer and fractional, is zero.
    pub fn is_zero(&self) -> bool {
        self.integer_is_zero() && self.fractional_digits.iter().all(|&d| d == 0)
    }

    /// True when a decimal part was supplied.
    pub fn has_fraction(&self) -> bool {
        !self.fractional_digits.is_empty()
    }
}

impl std::fmt::Display for SignedMagnitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        for d in &self.integer_digits {
            write!(f, "{d}")?;
        }
        if self.has_fraction() {
            f.write_str(".")?;
            for d in &self.fractional_digits {
                write!(f, "{d}")?;
            }
        }
        Ok(())
    }
}

/// Per-call conversion options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Output locale; the default locale when absent.
    #[serde(default)]
    pub locale: Option<Locale>,
}

impl ConvertOptions {
    /// Options selecting a specific locale.
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            locale: Some(locale),
        }
    }

    /// The locale these options resolve to.
    pub fn resolved_locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }
}
