//! Input validation and decomposition into sign and digit sequences.

use num_bigint::{BigInt, Sign};
use words_core::{NumericInput, SignedMagnitude, WordsError, WordsResult};

/// Validate a value and split it into sign, integer digits and fractional digits.
pub fn normalize(value: &NumericInput) -> WordsResult<SignedMagnitude> {
    match value {
        NumericInput::Number(n) => normalize_f64(*n),
        NumericInput::Text(s) => normalize_str(s),
        NumericInput::BigInt(b) => normalize_bigint(b),
    }
}

/// Parse a decimal string: optional `-`, digits, optional `.` and digits.
///
/// Surrounding whitespace is ignored. Fractional digits are kept exactly as
/// written, trailing zeros included.
pub fn normalize_str(input: &str) -> WordsResult<SignedMagnitude> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(WordsError::EmptyValue);
    }

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let integer_digits = parse_digits(int_part).ok_or_else(|| WordsError::invalid_format(input))?;
    let fractional_digits = match frac_part {
        Some(frac) => parse_digits(frac).ok_or_else(|| WordsError::invalid_format(input))?,
        None => Vec::new(),
    };

    SignedMagnitude::new(negative, integer_digits, fractional_digits)
}

/// Decompose a finite float using its shortest round-trip decimal form.
fn normalize_f64(value: f64) -> WordsResult<SignedMagnitude> {
    if !value.is_finite() {
        return Err(WordsError::NonFinite { value });
    }
    // Covers -0.0 as well.
    if value == 0.0 {
        return SignedMagnitude::new(false, vec![0], Vec::new());
    }

    let mut buf = ryu_js::Buffer::new();
    let rendered = buf.format(value);
    let plain = expand_exponent(rendered)?;
    normalize_str(&plain)
}

fn normalize_bigint(value: &BigInt) -> WordsResult<SignedMagnitude> {
    let negative = value.sign() == Sign::Minus;
    let digits = value.magnitude().to_radix_be(10);
    SignedMagnitude::new(negative, digits, Vec::new())
}

fn parse_digits(s: &str) -> Option<Vec<u8>> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(s.bytes().map(|b| b - b'0').collect())
}

/// Rewrite `1.5e+21` / `1e-7` style output as plain positional digits.
fn expand_exponent(rendered: &str) -> WordsResult<String> {
    let Some((mantissa, exponent)) = rendered.split_once(['e', 'E']) else {
        return Ok(rendered.to_string());
    };

    let exponent: i64 = exponent
        .trim_start_matches('+')
        .parse()
        .map_err(|_| WordsError::invalid_format(rendered))?;

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = format!("{int_part}{frac_part}");
    let point = int_part.len() as i64 + exponent;

    let plain = if point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else if point as usize >= digits.len() {
        format!("{digits}{}", "0".repeat(point as usize - digits.len()))
    } else {
        let (head, tail) = digits.split_at(point as usize);
        format!("{head}.{tail}")
    };

    Ok(format!("{sign}{plain}"))
}
