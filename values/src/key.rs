use alloc::string::String;
use core::fmt;

use ecow::EcoString;

/// A container key.
///
/// Keys are either integers or strings. A string that spells out an `i64` in
/// canonical decimal form (`"8"`, `"-3"`) is stored as [`Key::Int`], so
/// `"8"` and `8` address the same slot. Strings such as `"08"`, `"+1"` or
/// `"1.0"` stay strings.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Str(EcoString),
}

impl Key {
    /// Build a key from a string, normalising canonical integers.
    pub fn from_str_normalized(s: &str) -> Self {
        match canonical_int(s) {
            Some(i) => Key::Int(i),
            None => Key::Str(EcoString::from(s)),
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(i) => Some(*i),
            Key::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(s) => Some(s.as_str()),
        }
    }
}

/// Parse `s` as an integer key if it is the canonical form of an `i64`.
fn canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Leading zeros and negative zero are not canonical.
    if (digits.len() > 1 && digits.starts_with('0')) || s == "-0" {
        return None;
    }
    s.parse().ok()
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{}", i),
            Key::Str(s) => write!(f, "{:?}", s.as_str()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{}", i),
            Key::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Int(value as i64)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::from_str_normalized(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::from_str_normalized(&value)
    }
}

impl From<EcoString> for Key {
    fn from(value: EcoString) -> Self {
        match canonical_int(&value) {
            Some(i) => Key::Int(i),
            None => Key::Str(value),
        }
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_integers_become_int_keys() {
        assert_eq!(Key::from("8"), Key::Int(8));
        assert_eq!(Key::from("-3"), Key::Int(-3));
        assert_eq!(Key::from("0"), Key::Int(0));
    }

    #[test]
    fn non_canonical_strings_stay_strings() {
        for s in ["08", "+1", "1.0", "-0", "", " 1", "abc", "99999999999999999999"] {
            assert_eq!(Key::from(s), Key::Str(EcoString::from(s)), "{s:?}");
        }
    }
}
