//! Named callbacks.
//!
//! Callers that only have a function name (for example one read from input)
//! resolve it once with [`Builtin::lookup`] and then ask for a closure of the
//! right shape: [`Builtin::unary`] for `map` and `apply`, [`Builtin::predicate`]
//! for `filter`, [`Builtin::binary`] for `reduce`.

use core::{cmp::Ordering, fmt, str::FromStr};

use arraywrap_values::{Number, Value, compare::loose_cmp};
use ecow::EcoString;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    StrToUpper,
    StrToLower,
    Trim,
    StrLen,
    Abs,
    Sqrt,
    IntVal,
    FloatVal,
    StrVal,
    BoolVal,
    IsInt,
    IsFloat,
    IsString,
    IsBool,
    IsNull,
    IsArray,
    IsObject,
    IsNumeric,
    /// Escapes the HTML special characters `& < > " '`.
    HtmlSpecialChars,
    Max,
    Min,
}

const ALL: &[Builtin] = &[
    Builtin::StrToUpper,
    Builtin::StrToLower,
    Builtin::Trim,
    Builtin::StrLen,
    Builtin::Abs,
    Builtin::Sqrt,
    Builtin::IntVal,
    Builtin::FloatVal,
    Builtin::StrVal,
    Builtin::BoolVal,
    Builtin::IsInt,
    Builtin::IsFloat,
    Builtin::IsString,
    Builtin::IsBool,
    Builtin::IsNull,
    Builtin::IsArray,
    Builtin::IsObject,
    Builtin::IsNumeric,
    Builtin::HtmlSpecialChars,
    Builtin::Max,
    Builtin::Min,
];

impl Builtin {
    /// Resolve a builtin by name.
    ///
    /// `htmlentities` is accepted as an alias of `htmlspecialchars`.
    pub fn lookup(name: &str) -> Result<Self> {
        let found = match name {
            "htmlentities" => Some(Builtin::HtmlSpecialChars),
            _ => ALL.iter().copied().find(|b| b.name() == name),
        };
        match found {
            Some(builtin) => {
                tracing::debug!(name, ?builtin, "resolved builtin");
                Ok(builtin)
            }
            None => {
                tracing::debug!(name, "unknown builtin");
                Err(Error::InvalidCallback {
                    name: EcoString::from(name),
                    reason: "unknown builtin",
                })
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::StrToUpper => "strtoupper",
            Builtin::StrToLower => "strtolower",
            Builtin::Trim => "trim",
            Builtin::StrLen => "strlen",
            Builtin::Abs => "abs",
            Builtin::Sqrt => "sqrt",
            Builtin::IntVal => "intval",
            Builtin::FloatVal => "floatval",
            Builtin::StrVal => "strval",
            Builtin::BoolVal => "boolval",
            Builtin::IsInt => "is_int",
            Builtin::IsFloat => "is_float",
            Builtin::IsString => "is_string",
            Builtin::IsBool => "is_bool",
            Builtin::IsNull => "is_null",
            Builtin::IsArray => "is_array",
            Builtin::IsObject => "is_object",
            Builtin::IsNumeric => "is_numeric",
            Builtin::HtmlSpecialChars => "htmlspecialchars",
            Builtin::Max => "max",
            Builtin::Min => "min",
        }
    }

    /// Number of arguments the builtin takes.
    pub fn arity(self) -> usize {
        match self {
            Builtin::Max | Builtin::Min => 2,
            _ => 1,
        }
    }

    /// A one-argument closure, for `map` and `apply`.
    pub fn unary(self) -> Result<impl Fn(&Value) -> Value> {
        self.expect_arity(1)?;
        Ok(move |value: &Value| self.call1(value))
    }

    /// A one-argument closure whose result is read as a truth value, for
    /// `filter`.
    pub fn predicate(self) -> Result<impl Fn(&Value) -> bool> {
        let f = self.unary()?;
        Ok(move |value: &Value| f(value).is_truthy())
    }

    /// A two-argument closure, for `reduce`.
    pub fn binary(self) -> Result<impl Fn(Value, &Value) -> Value> {
        self.expect_arity(2)?;
        Ok(move |acc: Value, value: &Value| self.call2(acc, value))
    }

    fn expect_arity(self, arity: usize) -> Result<()> {
        if self.arity() == arity {
            return Ok(());
        }
        Err(Error::InvalidCallback {
            name: EcoString::from(self.name()),
            reason: if arity == 1 {
                "expects two arguments, not one"
            } else {
                "expects one argument, not two"
            },
        })
    }

    fn call1(self, value: &Value) -> Value {
        match self {
            Builtin::StrToUpper => Value::from(value.stringify().to_ascii_uppercase()),
            Builtin::StrToLower => Value::from(value.stringify().to_ascii_lowercase()),
            Builtin::Trim => {
                let s = value.stringify();
                Value::from(s.trim_matches([' ', '\t', '\n', '\r', '\0', '\x0B']))
            }
            Builtin::StrLen => Value::from(value.stringify().len()),
            Builtin::Abs => match value.to_number() {
                Number::Int(i) => match i.checked_abs() {
                    Some(abs) => Value::Int(abs),
                    None => Value::Float((i as f64).abs()),
                },
                Number::Float(f) => Value::Float(f.abs()),
            },
            Builtin::Sqrt => Value::Float(value.to_number().as_f64().sqrt()),
            Builtin::IntVal => Value::Int(int_value(value)),
            Builtin::FloatVal => Value::Float(match value {
                Value::Array(c) => !c.is_empty() as i64 as f64,
                other => other.to_number().as_f64(),
            }),
            Builtin::StrVal => Value::from(value.stringify()),
            Builtin::BoolVal => Value::Bool(value.is_truthy()),
            Builtin::IsInt => Value::Bool(matches!(value, Value::Int(_))),
            Builtin::IsFloat => Value::Bool(matches!(value, Value::Float(_))),
            Builtin::IsString => Value::Bool(matches!(value, Value::Str(_))),
            Builtin::IsBool => Value::Bool(matches!(value, Value::Bool(_))),
            Builtin::IsNull => Value::Bool(value.is_null()),
            Builtin::IsArray => Value::Bool(matches!(value, Value::Array(_))),
            Builtin::IsObject => Value::Bool(matches!(value, Value::Object(_))),
            Builtin::IsNumeric => Value::Bool(value.is_numeric()),
            Builtin::HtmlSpecialChars => Value::from(escape_html(&value.stringify())),
            Builtin::Max | Builtin::Min => unreachable!("binary builtin called with one argument"),
        }
    }

    fn call2(self, acc: Value, value: &Value) -> Value {
        match self {
            // The earlier argument wins ties.
            Builtin::Max if loose_cmp(value, &acc) == Ordering::Greater => value.clone(),
            Builtin::Min if loose_cmp(value, &acc) == Ordering::Less => value.clone(),
            Builtin::Max | Builtin::Min => acc,
            _ => unreachable!("unary builtin called with two arguments"),
        }
    }
}

/// Integer conversion: floats truncate toward zero, arrays become 0 or 1.
fn int_value(value: &Value) -> i64 {
    match value {
        Value::Array(c) => !c.is_empty() as i64,
        Value::Object(_) => 1,
        other => match other.to_number() {
            Number::Int(i) => i,
            Number::Float(f) if f.is_finite() => f as i64,
            Number::Float(_) => 0,
        },
    }
}

fn escape_html(s: &str) -> EcoString {
    let mut out = EcoString::new();
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Builtin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Builtin::lookup(s)
    }
}

#[cfg(test)]
#[path = "builtin_test.rs"]
mod builtin_test;
