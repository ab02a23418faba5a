//! Spelling numbers inside free text.
//!
//! A [`TextSpeller`] runs an ordered pipeline of [`Rule`]s over the input.
//! The default pipeline collapses whitespace and then replaces every token
//! that is a plain decimal number with its spelling.

use tracing::instrument;
use words_core::{Locale, WordsError, WordsResult};

use crate::assemble::assemble;
use crate::normalize::normalize_str;
use crate::rules_for;

/// A text rewriting rule.
pub trait Rule: Send + Sync + std::fmt::Debug {
    /// Get the rule name.
    fn name(&self) -> &str;

    /// Check if this rule applies to the given locale.
    fn applies_to(&self, locale: Locale) -> bool;

    /// Apply the rule to the input text.
    fn apply(&self, input: &str, locale: Locale) -> WordsResult<String>;
}

/// Create the default set of rules.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(WhitespaceRule), Box::new(NumberRule)]
}

/// Collapse runs of whitespace into single spaces and trim.
#[derive(Debug)]
pub struct WhitespaceRule;

impl Rule for WhitespaceRule {
    fn name(&self) -> &str {
        "whitespace"
    }

    fn applies_to(&self, _locale: Locale) -> bool {
        true
    }

    fn apply(&self, input: &str, _locale: Locale) -> WordsResult<String> {
        Ok(input.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}

/// Replace numeric tokens with words.
///
/// A token qualifies when, after removing a leading `(` and trailing
/// `.,;:!?)`, it is a plain decimal number: optional `-`, digits, optional
/// `.` and digits.
/// Whitespace between tokens is preserved.
#[derive(Debug)]
pub struct NumberRule;

impl NumberRule {
    fn spell_token(token: &str, locale: Locale) -> String {
        let body = token.trim_start_matches('(');
        let prefix = &token[..token.len() - body.len()];
        let core = body.trim_end_matches(['.', ',', ';', ':', '!', '?', ')']);
        let suffix = &body[core.len()..];

        let starts_numeric = core
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit() || c == '-');
        if !starts_numeric {
            return token.to_string();
        }

        match normalize_str(core) {
            Ok(magnitude) => {
                let words = assemble(&magnitude, rules_for(locale));
                format!("{prefix}{words}{suffix}")
            }
            Err(_) => token.to_string(),
        }
    }
}

impl Rule for NumberRule {
    fn name(&self) -> &str {
        "number"
    }

    fn applies_to(&self, _locale: Locale) -> bool {
        true
    }

    fn apply(&self, input: &str, locale: Locale) -> WordsResult<String> {
        let mut result = String::with_capacity(input.len() * 2);

        for piece in input.split_inclusive(char::is_whitespace) {
            let token = piece.trim_end_matches(char::is_whitespace);
            result.push_str(&Self::spell_token(token, locale));
            result.push_str(&piece[token.len()..]);
        }

        Ok(result)
    }
}

/// Text speller with configurable rule pipeline.
#[derive(Debug)]
pub struct TextSpeller {
    rules: Vec<Box<dyn Rule>>,
    default_locale: Locale,
}

impl Default for TextSpeller {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSpeller {
    /// Create a new speller with default rules.
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
            default_locale: Locale::default(),
        }
    }

    /// Create a speller with custom rules.
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self {
            rules,
            default_locale: Locale::default(),
        }
    }

    /// Use `locale` when no hint is passed to [`TextSpeller::spell`].
    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = locale;
        self
    }

    /// Add a rule to the pipeline.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Names of the rules in pipeline order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run the pipeline over `input`.
    #[instrument(level = "trace", skip(self, input), fields(input_len = input.len()))]
    pub fn spell(&self, input: &str, locale_hint: Option<Locale>) -> WordsResult<String> {
        if input.trim().is_empty() {
            return Err(WordsError::EmptyValue);
        }

        let locale = locale_hint.unwrap_or(self.default_locale);
        let mut text = input.to_string();

        for rule in &self.rules {
            if rule.applies_to(locale) {
                text = rule.apply(&text, locale)?;
            }
        }

        Ok(text)
    }
}
