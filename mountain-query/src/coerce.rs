//! Value normalization shared by every comparison and display path.

use crate::catalog::ValueKind;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Boolean(bool),
    Number(f64),
    Text(String),
    Absent,
}

impl TypedValue {
    /// Case-folded, trimmed text form used for string and set membership matching.
    pub fn match_text(&self) -> Option<String> {
        match self {
            TypedValue::Text(s) => Some(s.trim().to_lowercase()),
            TypedValue::Absent => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Boolean(b) => write!(f, "{}", b),
            TypedValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            TypedValue::Number(n) => write!(f, "{}", n),
            TypedValue::Text(s) => write!(f, "{}", s),
            TypedValue::Absent => write!(f, "unknown"),
        }
    }
}

/// Optional sign, digits, at most one decimal point. No exponents, no "inf"/"NaN".
fn parse_number(text: &str) -> Option<f64> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    let is_plain_decimal = digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.matches('.').count() <= 1;
    if !is_plain_decimal {
        return None;
    }
    text.parse::<f64>().ok()
}

/// Turns literal query text into a typed value: boolean words first, then base-10 numbers,
/// then trimmed text. Optional-number fields only take the numeric path.
pub fn coerce(kind: ValueKind, raw: &str) -> TypedValue {
    let text = raw.trim();
    if kind == ValueKind::OptionalNumber {
        return parse_number(text).map_or(TypedValue::Absent, TypedValue::Number);
    }
    if text.eq_ignore_ascii_case("true") {
        TypedValue::Boolean(true)
    } else if text.eq_ignore_ascii_case("false") {
        TypedValue::Boolean(false)
    } else if let Some(number) = parse_number(text) {
        TypedValue::Number(number)
    } else {
        TypedValue::Text(text.to_string())
    }
}

/// Applies the same rules to a stored JSON value. Missing, null and structured values are absent.
pub fn coerce_stored(kind: ValueKind, value: Option<&Value>) -> TypedValue {
    match value {
        Some(Value::String(s)) => coerce(kind, s),
        Some(Value::Number(num)) => num.as_f64().map_or(TypedValue::Absent, TypedValue::Number),
        Some(Value::Bool(b)) if kind != ValueKind::OptionalNumber => TypedValue::Boolean(*b),
        _ => TypedValue::Absent,
    }
}
