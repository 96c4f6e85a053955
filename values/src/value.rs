use alloc::{format, rc::Rc, string::String, vec::Vec};
use core::{fmt, ops::Index};

use ecow::EcoString;

use crate::{Container, Key};

/// A dynamically typed value stored in a [`Container`].
///
/// Arrays have value semantics: cloning a value deep-copies nested arrays.
/// Objects are shared handles; clones point at the same record, and strict
/// comparison ([`crate::identical`]) is by identity.
#[derive(Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(EcoString),
    Array(Container),
    Object(Rc<Container>),
}

/// Returned by `Index` for absent keys.
pub(crate) const NULL: &Value = &Value::Null;

static_assertions::assert_impl_all!(Value: Clone, Default, PartialEq, fmt::Debug);
static_assertions::assert_not_impl_any!(Value: Send, Sync);

impl Value {
    // ============================================================================
    // Construction
    // ============================================================================

    /// Create an object value (a shared record) from its fields.
    pub fn object(fields: impl Into<Container>) -> Self {
        Value::Object(Rc::new(fields.into()))
    }

    pub fn str(s: impl Into<EcoString>) -> Self {
        Value::Str(s.into())
    }

    // ============================================================================
    // Inspection
    // ============================================================================

    /// Name of the variant, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_)
        )
    }

    /// Truthiness: `null`, `false`, `0`, `0.0`, `""`, `"0"` and the empty
    /// array are falsy. Objects are always truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !(s.is_empty() || s.as_str() == "0"),
            Value::Array(c) => !c.is_empty(),
            Value::Object(_) => true,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Container> {
        match self {
            Value::Array(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Container> {
        match self {
            Value::Array(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Rc<Container>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Read a field of an object or an element of an array.
    pub fn field(&self, key: impl Into<Key>) -> Option<&Value> {
        match self {
            Value::Array(c) => c.get(key),
            Value::Object(o) => o.get(key),
            _ => None,
        }
    }

    /// The string form used by string comparisons and string builtins.
    ///
    /// `null` and `false` are empty, `true` is `"1"`, integral floats drop
    /// their fraction. Arrays and objects have the fixed forms `"Array"` and
    /// `"Object"`.
    pub fn stringify(&self) -> EcoString {
        match self {
            Value::Null | Value::Bool(false) => EcoString::new(),
            Value::Bool(true) => EcoString::from("1"),
            Value::Int(i) => EcoString::from(format!("{}", i)),
            Value::Float(f) => float_string(*f),
            Value::Str(s) => s.clone(),
            Value::Array(_) => EcoString::from("Array"),
            Value::Object(_) => EcoString::from("Object"),
        }
    }
}

/// Format a float the way string coercion expects.
fn float_string(value: f64) -> EcoString {
    if value.is_nan() {
        EcoString::from("NAN")
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            EcoString::from("INF")
        } else {
            EcoString::from("-INF")
        }
    } else if -INTEGRAL_PRINT_BOUND < value
        && value < INTEGRAL_PRINT_BOUND
        && value == (value as i64) as f64
    {
        EcoString::from(format!("{}", value as i64))
    } else {
        EcoString::from(format!("{}", value))
    }
}

/// Integral floats within this bound print without an exponent or fraction.
const INTEGRAL_PRINT_BOUND: f64 = 1e15;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => {
                let s = format!("{}", x);
                if s.contains('.') || s.contains('e') || !x.is_finite() {
                    write!(f, "{}", s)
                } else {
                    write!(f, "{}.0", s)
                }
            }
            Value::Str(s) => write!(f, "{:?}", s.as_str()),
            Value::Array(c) => write!(f, "{:?}", c),
            Value::Object(o) => write!(f, "object{:?}", o.as_ref()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Complex types: delegate to Debug
            Value::Array(_) | Value::Object(_) => write!(f, "{:?}", self),
            _ => f.write_str(&self.stringify()),
        }
    }
}

impl<K: Into<Key>> Index<K> for Value {
    type Output = Value;

    /// Element or field access; anything absent reads as `null`.
    fn index(&self, key: K) -> &Value {
        self.field(key).unwrap_or(NULL)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(EcoString::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(EcoString::from(value))
    }
}

impl From<EcoString> for Value {
    fn from(value: EcoString) -> Self {
        Value::Str(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Str(EcoString::from(value))
    }
}

impl From<Key> for Value {
    fn from(value: Key) -> Self {
        match value {
            Key::Int(i) => Value::Int(i),
            Key::Str(s) => Value::Str(s),
        }
    }
}

impl From<Container> for Value {
    fn from(value: Container) -> Self {
        Value::Array(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Array(value.into_iter().map(Into::<Value>::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;

    #[test]
    fn truthiness() {
        let falsy = [
            Value::Null,
            Value::Bool(false),
            Value::Int(0),
            Value::Float(0.0),
            Value::from(""),
            Value::from("0"),
            Value::from(array![]),
        ];
        for v in &falsy {
            assert!(!v.is_truthy(), "{v:?} should be falsy");
        }

        let truthy = [
            Value::Bool(true),
            Value::Int(-1),
            Value::Float(0.1),
            Value::from("0.0"),
            Value::from(" "),
            Value::from(array![0]),
            Value::object(array![]),
        ];
        for v in &truthy {
            assert!(v.is_truthy(), "{v:?} should be truthy");
        }
    }

    #[test]
    fn stringify_scalars() {
        assert_eq!(Value::Null.stringify().as_str(), "");
        assert_eq!(Value::Bool(true).stringify().as_str(), "1");
        assert_eq!(Value::Bool(false).stringify().as_str(), "");
        assert_eq!(Value::Int(-12).stringify().as_str(), "-12");
        assert_eq!(Value::Float(2.0).stringify().as_str(), "2");
        assert_eq!(Value::Float(1.5).stringify().as_str(), "1.5");
        assert_eq!(Value::from(array![1]).stringify().as_str(), "Array");
    }

    #[test]
    fn object_clones_share_the_record() {
        let a = Value::object(array!["id" => 1]);
        let b = a.clone();
        assert!(Rc::ptr_eq(a.as_object().unwrap(), b.as_object().unwrap()));
        assert_eq!(a.field("id"), Some(&Value::Int(1)));
    }

    #[test]
    fn debug_output() {
        let v = Value::from(array![0 => 1, "a" => 2.0, 1 => "x"]);
        assert_eq!(format!("{v:?}"), r#"{0: 1, "a": 2.0, 1: "x"}"#);
    }
}
