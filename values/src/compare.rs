//! Equality and ordering between dynamic values.
//!
//! Two families of rules exist. *Strict* rules never convert: values must
//! have the same variant to be equal, and objects are equal only to
//! themselves. *Loose* rules convert before comparing: booleans and `null`
//! compare by truthiness, numbers and numeric strings compare numerically,
//! and everything else falls back to string comparison.

use alloc::rc::Rc;
use core::cmp::Ordering;

use crate::{Container, Value, numeric::parse_numeric};

/// Comparison strategy for sorting, de-duplication and searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// Loose comparison with the usual conversions.
    #[default]
    Regular,
    /// Compare both sides as numbers.
    Numeric,
    /// Compare string forms byte by byte.
    String,
    /// Compare string forms ignoring ASCII case.
    StringCaseInsensitive,
    /// Natural order: digit runs compare by numeric value (`"a2" < "a10"`).
    Natural,
    /// Natural order ignoring ASCII case.
    NaturalCaseInsensitive,
    /// No conversions: a total order by variant, then by value.
    Strict,
}

impl Comparison {
    /// Whether `a` and `b` count as the same value under this strategy.
    pub fn equal(self, a: &Value, b: &Value) -> bool {
        match self {
            Comparison::Strict => identical(a, b),
            Comparison::Regular => loose_eq(a, b),
            other => compare(a, b, other) == Ordering::Equal,
        }
    }
}

/// Order `a` and `b` under the given strategy.
pub fn compare(a: &Value, b: &Value, how: Comparison) -> Ordering {
    match how {
        Comparison::Regular => loose_cmp(a, b),
        Comparison::Numeric => a.to_number().num_cmp(b.to_number()),
        Comparison::String => a.stringify().as_bytes().cmp(b.stringify().as_bytes()),
        Comparison::StringCaseInsensitive => {
            let (a, b) = (a.stringify(), b.stringify());
            cmp_ascii_folded(a.as_bytes(), b.as_bytes())
        }
        Comparison::Natural => natural_cmp(&a.stringify(), &b.stringify(), false),
        Comparison::NaturalCaseInsensitive => natural_cmp(&a.stringify(), &b.stringify(), true),
        Comparison::Strict => strict_cmp(a, b),
    }
}

// ============================================================================
// Strict rules
// ============================================================================

/// Strict equality: same variant and same value, objects by identity.
///
/// `1` is not identical to `1.0`, and `0` is not identical to `false`.
/// Arrays are identical when they hold identical values under the same keys
/// in the same order.
pub fn identical(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::Str(x), Value::Str(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .zip(y.iter())
                    .all(|((ka, va), (kb, vb))| ka == kb && identical(va, vb))
        }
        (Value::Object(x), Value::Object(y)) => Rc::ptr_eq(x, y),
        _ => false,
    }
}

fn strict_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) => 2,
        Value::Float(_) => 3,
        Value::Str(_) => 4,
        Value::Array(_) => 5,
        Value::Object(_) => 6,
    }
}

fn strict_cmp(a: &Value, b: &Value) -> Ordering {
    match strict_rank(a).cmp(&strict_rank(b)) {
        Ordering::Equal => {}
        ord => return ord,
    }

    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Float(x), Value::Float(y)) => x.total_cmp(y),
        (Value::Str(x), Value::Str(y)) => x.as_bytes().cmp(y.as_bytes()),
        (Value::Array(x), Value::Array(y)) => {
            // Lexicographic over entries
            for ((ka, va), (kb, vb)) in x.iter().zip(y.iter()) {
                match ka.cmp(kb).then_with(|| strict_cmp(va, vb)) {
                    Ordering::Equal => continue,
                    ord => return ord,
                }
            }
            x.len().cmp(&y.len())
        }
        (Value::Object(x), Value::Object(y)) => {
            (Rc::as_ptr(x) as usize).cmp(&(Rc::as_ptr(y) as usize))
        }
        _ => Ordering::Equal,
    }
}

// ============================================================================
// Loose rules
// ============================================================================

/// Loose equality (`==`).
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), other) | (other, Value::Bool(x)) => *x == other.is_truthy(),
        (Value::Null, Value::Str(s)) | (Value::Str(s), Value::Null) => s.is_empty(),
        (Value::Null, other) | (other, Value::Null) => !other.is_truthy(),
        (Value::Str(x), Value::Str(y)) => match (parse_numeric(x), parse_numeric(y)) {
            (Some(nx), Some(ny)) => nx.num_eq(ny),
            _ => x == y,
        },
        (Value::Str(s), num @ (Value::Int(_) | Value::Float(_)))
        | (num @ (Value::Int(_) | Value::Float(_)), Value::Str(s)) => match parse_numeric(s) {
            Some(n) => n.num_eq(num.to_number()),
            None => num.stringify() == *s,
        },
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            a.to_number().num_eq(b.to_number())
        }
        (Value::Array(x), Value::Array(y)) => containers_loose_eq(x, y),
        (Value::Object(x), Value::Object(y)) => Rc::ptr_eq(x, y) || containers_loose_eq(x, y),
        _ => false,
    }
}

fn containers_loose_eq(x: &Container, y: &Container) -> bool {
    x.len() == y.len()
        && x
            .iter()
            .all(|(k, va)| y.get(k).is_some_and(|vb| loose_eq(va, vb)))
}

/// Loose ordering (`<=>`).
///
/// Arrays order by length, then element by element under the left-hand
/// keys. Arrays and objects order above scalars.
pub fn loose_cmp(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(_), _) | (_, Value::Bool(_)) => a.is_truthy().cmp(&b.is_truthy()),
        (Value::Null, Value::Str(s)) => "".cmp(s.as_str()),
        (Value::Str(s), Value::Null) => s.as_str().cmp(""),
        (Value::Null, _) | (_, Value::Null) => a.is_truthy().cmp(&b.is_truthy()),
        (Value::Str(x), Value::Str(y)) => match (parse_numeric(x), parse_numeric(y)) {
            (Some(nx), Some(ny)) => nx.num_cmp(ny),
            _ => x.as_bytes().cmp(y.as_bytes()),
        },
        (Value::Str(s), Value::Int(_) | Value::Float(_)) => match parse_numeric(s) {
            Some(n) => n.num_cmp(b.to_number()),
            None => s.as_bytes().cmp(b.stringify().as_bytes()),
        },
        (Value::Int(_) | Value::Float(_), Value::Str(s)) => match parse_numeric(s) {
            Some(n) => a.to_number().num_cmp(n),
            None => a.stringify().as_bytes().cmp(s.as_bytes()),
        },
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            a.to_number().num_cmp(b.to_number())
        }
        (Value::Array(x), Value::Array(y)) => containers_loose_cmp(x, y),
        (Value::Object(x), Value::Object(y)) => {
            if Rc::ptr_eq(x, y) {
                Ordering::Equal
            } else {
                containers_loose_cmp(x, y)
            }
        }
        (Value::Object(_), _) => Ordering::Greater,
        (_, Value::Object(_)) => Ordering::Less,
        (Value::Array(_), _) => Ordering::Greater,
        (_, Value::Array(_)) => Ordering::Less,
    }
}

fn containers_loose_cmp(x: &Container, y: &Container) -> Ordering {
    match x.len().cmp(&y.len()) {
        Ordering::Equal => {}
        ord => return ord,
    }
    for (k, va) in x.iter() {
        let Some(vb) = y.get(k) else {
            // Uncomparable: the left side wins.
            return Ordering::Greater;
        };
        match loose_cmp(va, vb) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

// ============================================================================
// String orderings
// ============================================================================

fn cmp_ascii_folded(a: &[u8], b: &[u8]) -> Ordering {
    a.iter()
        .map(u8::to_ascii_lowercase)
        .cmp(b.iter().map(u8::to_ascii_lowercase))
}

/// Natural order comparison.
///
/// Runs of digits compare by numeric value, ignoring leading zeros; other
/// bytes compare one at a time. Leading whitespace is ignored.
pub fn natural_cmp(a: &str, b: &str, fold_case: bool) -> Ordering {
    let a = a.trim_start_matches(|c: char| c.is_ascii_whitespace()).as_bytes();
    let b = b.trim_start_matches(|c: char| c.is_ascii_whitespace()).as_bytes();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let (run_a, next_i) = digit_run(a, i);
            let (run_b, next_j) = digit_run(b, j);
            let ord = run_a.len().cmp(&run_b.len()).then_with(|| run_a.cmp(run_b));
            if ord != Ordering::Equal {
                return ord;
            }
            i = next_i;
            j = next_j;
            continue;
        }

        let (ca, cb) = if fold_case {
            (a[i].to_ascii_lowercase(), b[j].to_ascii_lowercase())
        } else {
            (a[i], b[j])
        };
        match ca.cmp(&cb) {
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
            ord => return ord,
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

/// The digit run starting at `start` with leading zeros stripped, and the
/// index just past it.
fn digit_run(s: &[u8], start: usize) -> (&[u8], usize) {
    let mut end = start;
    while end < s.len() && s[end].is_ascii_digit() {
        end += 1;
    }
    let mut first = start;
    while first + 1 < end && s[first] == b'0' {
        first += 1;
    }
    (&s[first..end], end)
}

#[cfg(test)]
#[path = "compare_test.rs"]
mod compare_test;
