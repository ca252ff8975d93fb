//! Scalar classification for the custom format.
//!
//! Classification order is fixed: integer, decimal, boolean, double-quoted
//! string, then the raw text. The input is not trimmed.

use crate::types::Value;

/// Classify one raw token into a typed [`Value`].
///
/// - `42`, `-7`, `+3` become integers (when they fit in an `i64`)
/// - `1.5`, `-0.25` become floats
/// - `true` / `FALSE` become booleans (case-insensitive)
/// - `"text"` becomes the string `text` (one quote pair stripped)
/// - anything else is returned verbatim as a string
pub fn classify_scalar(raw: &str) -> Value {
    if let Some(n) = parse_integer(raw) {
        return Value::Integer(n);
    }
    if let Some(n) = parse_decimal(raw) {
        return Value::Float(n);
    }
    if raw.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if let Some(inner) = strip_quotes(raw) {
        return Value::String(inner.to_string());
    }
    Value::String(raw.to_string())
}

fn unsigned(raw: &str) -> &str {
    raw.strip_prefix(['-', '+']).unwrap_or(raw)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_integer(raw: &str) -> Option<i64> {
    if !is_digits(unsigned(raw)) {
        return None;
    }
    raw.parse().ok()
}

fn parse_decimal(raw: &str) -> Option<f64> {
    let (whole, fraction) = unsigned(raw).split_once('.')?;
    if !is_digits(whole) || !is_digits(fraction) {
        return None;
    }
    raw.parse().ok().filter(|n: &f64| n.is_finite())
}

fn strip_quotes(raw: &str) -> Option<&str> {
    raw.strip_prefix('"')?.strip_suffix('"')
}
