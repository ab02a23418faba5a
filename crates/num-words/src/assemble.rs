//! Joins spelled clusters, scale words, sign and fraction into the final text.

use words_core::SignedMagnitude;

use crate::cluster::{ClusterPosition, spell_cluster};
use crate::locale::LocaleRules;

/// Split integer digits into 0-999 clusters, least significant first.
pub fn clusters(digits: &[u8]) -> Vec<u16> {
    digits
        .rchunks(3)
        .map(|chunk| chunk.iter().fold(0u16, |acc, &d| acc * 10 + u16::from(d)))
        .collect()
}

/// Spell a normalized magnitude using `rules`.
pub fn assemble(magnitude: &SignedMagnitude, rules: &LocaleRules) -> String {
    if magnitude.integer_is_zero() && !magnitude.has_fraction() {
        return rules.zero_word().to_string();
    }

    let mut words: Vec<String> = Vec::new();

    if magnitude.is_negative() {
        words.push(rules.negative.to_string());
    }

    if magnitude.integer_is_zero() {
        words.push(rules.zero_word().to_string());
    } else {
        words.extend(spell_integer(magnitude.integer_digits(), rules));
    }

    if magnitude.has_fraction() {
        words.push(rules.decimal_separator.to_string());
        words.extend(
            magnitude
                .fractional_digits()
                .iter()
                .map(|&d| rules.digit(d).to_string()),
        );
    }

    words.join(" ")
}

fn spell_integer(digits: &[u8], rules: &LocaleRules) -> Vec<String> {
    let scales = &rules.scales;
    let mut words = Vec::new();
    let mut has_higher_nonzero = false;
    let mut period_nonzero = false;

    for (index, &value) in clusters(digits).iter().enumerate().rev() {
        if value != 0 {
            let position = ClusterPosition { has_higher_nonzero };
            words.push(spell_cluster(value, position, rules));
            if let Some(scale) = scales.base_word(index) {
                words.push(scale.to_string());
            }
            has_higher_nonzero = true;
            period_nonzero = true;
        }

        if scales.closes_period(index) {
            if period_nonzero {
                for _ in 0..scales.super_repeat(index) {
                    words.push(scales.super_scale().to_string());
                }
            }
            period_nonzero = false;
        }
    }

    words
}
