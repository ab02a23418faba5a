//! English rules.

use words_core::Locale;

use super::{LocaleRules, TensJoiner};
use crate::scale::ScaleTable;

fn units_override(_tens: u8, _units: u8) -> Option<&'static str> {
    None
}

pub static ENGLISH: LocaleRules = LocaleRules {
    locale: Locale::En,
    digits: [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    ],
    teens: Some([
        "ten",
        "eleven",
        "twelve",
        "thirteen",
        "fourteen",
        "fifteen",
        "sixteen",
        "seventeen",
        "eighteen",
        "nineteen",
    ]),
    tens: [
        "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    ],
    hundred: "hundred",
    zero_hundreds_filler: false,
    zero_tens_filler: None,
    tens_joiner: TensJoiner::Hyphen,
    units_override,
    // Short scale up to novemdecillion (10^60); vigintillion (10^63) repeats.
    scales: ScaleTable::new(
        &[
            "",
            "thousand",
            "million",
            "billion",
            "trillion",
            "quadrillion",
            "quintillion",
            "sextillion",
            "septillion",
            "octillion",
            "nonillion",
            "decillion",
            "undecillion",
            "duodecillion",
            "tredecillion",
            "quattuordecillion",
            "quindecillion",
            "sexdecillion",
            "septendecillion",
            "octodecillion",
            "novemdecillion",
        ],
        "vigintillion",
    ),
    negative: "negative",
    decimal_separator: "point",
};
