//! Vietnamese rules.

use words_core::Locale;

use super::{LocaleRules, TensJoiner};
use crate::scale::ScaleTable;

/// `mốt` after twenty and above, `lăm` after any tens word.
fn units_override(tens: u8, units: u8) -> Option<&'static str> {
    match (tens, units) {
        (2..=9, 1) => Some("mốt"),
        (1..=9, 5) => Some("lăm"),
        _ => None,
    }
}

pub static VIETNAMESE: LocaleRules = LocaleRules {
    locale: Locale::Vi,
    digits: [
        "không", "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín",
    ],
    teens: None,
    tens: [
        "",
        "mười",
        "hai mươi",
        "ba mươi",
        "bốn mươi",
        "năm mươi",
        "sáu mươi",
        "bảy mươi",
        "tám mươi",
        "chín mươi",
    ],
    hundred: "trăm",
    zero_hundreds_filler: true,
    zero_tens_filler: Some("lẻ"),
    tens_joiner: TensJoiner::Space,
    units_override,
    scales: ScaleTable::new(&["", "nghìn", "triệu"], "tỷ"),
    negative: "âm",
    decimal_separator: "phẩy",
};
