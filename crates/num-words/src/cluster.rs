//! Spelling of a single 0-999 cluster.

use crate::locale::{LocaleRules, TensJoiner};

/// Where a cluster sits within the whole number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ClusterPosition {
    /// A more significant cluster is nonzero.
    pub has_higher_nonzero: bool,
}

/// Spell a cluster value `n` (0..=999) in words.
///
/// Zero yields the locale's zero word; the assembler never asks for it.
pub(crate) fn spell_cluster(n: u16, position: ClusterPosition, rules: &LocaleRules) -> String {
    debug_assert!(n < 1000, "cluster out of range: {n}");
    if n == 0 {
        return rules.zero_word().to_string();
    }

    let hundreds = (n / 100) as u8;
    let tens = (n / 10 % 10) as u8;
    let units = (n % 10) as u8;

    let mut out = String::new();

    if hundreds > 0 {
        push_word(&mut out, rules.digit(hundreds));
        push_word(&mut out, rules.hundred);
    } else if position.has_higher_nonzero && rules.zero_hundreds_filler {
        push_word(&mut out, rules.zero_word());
        push_word(&mut out, rules.hundred);
    }

    match tens {
        0 => {
            if units > 0 {
                // The filler keeps the base digit form: "lẻ năm", never "lẻ lăm".
                if hundreds > 0 || position.has_higher_nonzero {
                    if let Some(filler) = rules.zero_tens_filler {
                        push_word(&mut out, filler);
                    }
                }
                push_word(&mut out, rules.digit(units));
            }
        }
        1 => match rules.teens {
            Some(teens) => push_word(&mut out, teens[usize::from(units)]),
            None => {
                push_word(&mut out, rules.tens[1]);
                if units > 0 {
                    push_word(&mut out, rules.units_after_tens(1, units));
                }
            }
        },
        _ => {
            push_word(&mut out, rules.tens[usize::from(tens)]);
            if units > 0 {
                let word = rules.units_after_tens(tens, units);
                match rules.tens_joiner {
                    TensJoiner::Space => push_word(&mut out, word),
                    TensJoiner::Hyphen => {
                        out.push('-');
                        out.push_str(word);
                    }
                }
            }
        }
    }

    out
}

fn push_word(out: &mut String, word: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(word);
}
