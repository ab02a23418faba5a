//! Per-locale lexical tables.
//!
//! Each locale is a `static` [`LocaleRules`] value; the cluster speller and
//! assembler are plain functions parameterized by it.

mod en;
mod vi;

use words_core::Locale;

use crate::scale::ScaleTable;

pub use en::ENGLISH;
pub use vi::VIETNAMESE;

/// How a tens word and a following units word are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TensJoiner {
    /// Separate words (`hai mươi ba`).
    Space,
    /// One hyphenated word (`twenty-three`).
    Hyphen,
}

/// Lexical rules for one locale.
#[derive(Debug)]
pub struct LocaleRules {
    pub locale: Locale,
    /// Names of the digits 0-9; index 0 doubles as the zero word.
    pub digits: [&'static str; 10],
    /// Irregular 10-19 forms, indexed by the units digit. `None` means teens
    /// are built from `tens[1]` plus a units word.
    pub teens: Option<[&'static str; 10]>,
    /// Tens forms indexed by the tens digit.
    pub tens: [&'static str; 10],
    pub hundred: &'static str,
    /// Emit `<zero> <hundred>` for a cluster with a zero hundreds digit when
    /// a higher cluster is nonzero.
    pub zero_hundreds_filler: bool,
    /// Word placed between a hundreds part and a lone units digit.
    pub zero_tens_filler: Option<&'static str>,
    pub tens_joiner: TensJoiner,
    /// Positional replacement for a units word, given `(tens, units)`.
    pub units_override: fn(u8, u8) -> Option<&'static str>,
    pub scales: ScaleTable,
    pub negative: &'static str,
    pub decimal_separator: &'static str,
}

impl LocaleRules {
    /// The locale's word for zero.
    pub fn zero_word(&self) -> &'static str {
        self.digits[0]
    }

    /// Base form of a single digit.
    pub fn digit(&self, d: u8) -> &'static str {
        self.digits[usize::from(d)]
    }

    /// Units word following a tens digit, after positional overrides.
    pub fn units_after_tens(&self, tens: u8, units: u8) -> &'static str {
        (self.units_override)(tens, units).unwrap_or_else(|| self.digit(units))
    }
}
