//! Defensive numeric parsing and monetary rounding.
//!
//! Every numeric field of an outcome record goes through
//! [`parse_numeric_or_zero`], which never fails: anything that is not a
//! usable number reads as `0.0`. Monetary outputs are rounded to cents with
//! [`round_cents`] only at the point of return.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A numeric field as it arrives from a caller: a JSON number, a string
/// typed into a form, or anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    /// A JSON number.
    Number(f64),
    /// Free text, parsed by its leading numeric prefix.
    Text(String),
    /// Booleans, arrays, objects. Always read as zero.
    Other(serde_json::Value),
}

impl NumericInput {
    /// True only for a real (non-NaN) JSON number.
    ///
    /// Strings that happen to hold digits do not count.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(n) if !n.is_nan())
    }

    /// Parsed value, see [`parse_numeric_or_zero`].
    pub fn value(&self) -> f64 {
        parse_numeric_or_zero(self)
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
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

/// Parse a numeric field, returning `0.0` for anything unusable.
///
/// - numbers pass through (NaN becomes 0)
/// - text is read by its leading numeric prefix: `"2.5x"` is 2.5,
///   `"abc"` and `""` are 0, `"Infinity"` is infinite
/// - every other JSON value is 0
pub fn parse_numeric_or_zero(value: &NumericInput) -> f64 {
    match value {
        NumericInput::Number(n) if n.is_nan() => 0.0,
        NumericInput::Number(n) => *n,
        NumericInput::Text(text) => parse_leading_number(text),
        NumericInput::Other(_) => 0.0,
    }
}

/// Same as [`parse_numeric_or_zero`] for an optional field. Missing is 0.
pub fn parse_optional(value: Option<&NumericInput>) -> f64 {
    value.map_or(0.0, parse_numeric_or_zero)
}

fn parse_leading_number(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();

    let negative = bytes.first() == Some(&b'-');
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if trimmed[end..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end].parse::<f64>().unwrap_or(0.0)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Round a monetary or percentage value to two decimal places.
///
/// Rounds the exact binary value of `value * 100` half up (toward positive
/// infinity), so `1.005` is `1.00` and `-0.125` is `-0.12`. Non-finite input
/// comes back as `0.0`. Finite values beyond the decimal range are already
/// whole cents and pass through unchanged.
pub fn round_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }

    let scaled = value * 100.0;
    let strategy = if scaled < 0.0 {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };

    let rounded = Decimal::from_f64_retain(scaled)
        .and_then(|cents| cents.round_dp_with_strategy(0, strategy).to_f64())
        .map_or(value, |cents| cents / 100.0);

    // Normalise -0.0
    if rounded == 0.0 { 0.0 } else { rounded }
}
