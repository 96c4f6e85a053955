//! Numeric coercion of values.
//!
//! Aggregates and numeric comparisons read strings leniently: surrounding
//! whitespace is ignored, integers stay integers until they overflow, and
//! anything that is not fully numeric counts as zero.

use core::cmp::Ordering;

use crate::Value;

/// An integer or float produced by numeric coercion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Numeric equality; `Int(1) == Float(1.0)`.
    pub fn num_eq(self, other: Number) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }

    /// Numeric ordering. NaN orders above every other number.
    pub fn num_cmp(self, other: Number) -> Ordering {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(&b),
            (a, b) => {
                let (a, b) = (a.as_f64(), b.as_f64());
                a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
            }
        }
    }

    /// Sum, promoting to float on overflow.
    pub fn add(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => match a.checked_add(b) {
                Some(sum) => Number::Int(sum),
                None => Number::Float(a as f64 + b as f64),
            },
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }

    /// Product, promoting to float on overflow.
    pub fn mul(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => match a.checked_mul(b) {
                Some(product) => Number::Int(product),
                None => Number::Float(a as f64 * b as f64),
            },
            (a, b) => Number::Float(a.as_f64() * b.as_f64()),
        }
    }

    /// Division that stays integral when exact.
    ///
    /// Returns `None` when `other` is zero.
    pub fn div(self, other: Number) -> Option<Number> {
        match (self, other) {
            (_, Number::Int(0)) => None,
            (_, Number::Float(d)) if d == 0.0 => None,
            (Number::Int(a), Number::Int(b)) if a.checked_rem(b) == Some(0) => {
                Some(Number::Int(a / b))
            }
            (a, b) => Some(Number::Float(a.as_f64() / b.as_f64())),
        }
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        match value {
            Number::Int(i) => Value::Int(i),
            Number::Float(f) => Value::Float(f),
        }
    }
}

/// Parse a fully numeric string.
///
/// Accepts optional surrounding whitespace, an optional sign, digits with an
/// optional fraction, and an optional exponent. Integer literals that do not
/// fit an `i64` become floats.
pub fn parse_numeric(s: &str) -> Option<Number> {
    let trimmed = s.trim_matches(|c: char| c.is_ascii_whitespace());
    let bytes = trimmed.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;
    let mut integral = true;

    if i < bytes.len() && bytes[i] == b'.' {
        integral = false;
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }

    if mantissa_digits == 0 {
        return None;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        integral = false;
        i += 1;
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return None;
        }
    }

    if i != bytes.len() {
        return None;
    }

    if integral {
        if let Ok(int) = trimmed.parse::<i64>() {
            return Some(Number::Int(int));
        }
    }
    trimmed.parse::<f64>().ok().map(Number::Float)
}

impl Value {
    /// Coerce to a number.
    ///
    /// `true` is 1; `null`, `false`, non-numeric strings, arrays and
    /// objects are 0. [`Value::as_number`] returns `None` for the last three.
    pub fn to_number(&self) -> Number {
        self.as_number().unwrap_or(Number::Int(0))
    }

    /// The numeric value of scalars; `null` is 0. `None` for non-numeric
    /// strings, arrays and objects.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Int(i) => Some(Number::Int(*i)),
            Value::Float(f) => Some(Number::Float(*f)),
            Value::Bool(b) => Some(Number::Int(*b as i64)),
            Value::Null => Some(Number::Int(0)),
            Value::Str(s) => parse_numeric(s),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// True for ints, floats and numeric strings.
    pub fn is_numeric(&self) -> bool {
        match self {
            Value::Int(_) | Value::Float(_) => true,
            Value::Str(s) => parse_numeric(s).is_some(),
            _ => false,
        }
    }
}
