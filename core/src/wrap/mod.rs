//! The fluent wrapper.
//!
//! Operations are grouped by what they do:
//! - `transform`: per-entry rewrites (map, filter, flip, pad, ...)
//! - `merge`: combining containers
//! - `order`: reordering and de-duplication (sort, reverse, shuffle, unique)
//! - `fold`: reductions and aggregates
//! - `search`: lookups and predicates over entries
//! - `stack`: in-place push/pop at either end

use core::{fmt, ops::Index};

use arraywrap_values::{Container, Key, Value};
use ecow::EcoString;

use crate::{Error, Result};

mod fold;
mod merge;
mod order;
mod search;
mod stack;
mod transform;

/// A chainable view over an owned [`Container`].
///
/// Cloning a wrapper copies its container. Nested arrays are copied along
/// with it, objects stay shared.
#[derive(Clone, Default, PartialEq)]
pub struct ArrayWrap {
    data: Container,
}

impl ArrayWrap {
    // ============================================================================
    // Construction
    // ============================================================================

    pub fn new(data: Container) -> Self {
        Self { data }
    }

    /// Wrap a value that must be an array.
    ///
    /// Fails with [`Error::InvalidInput`] for anything else, objects
    /// included.
    pub fn create(data: impl Into<Value>) -> Result<Self> {
        let data = Container::try_from(data.into())?;
        Ok(Self::new(data))
    }

    /// The inclusive integer sequence from `start` to `end`.
    ///
    /// Counts down when `start > end`.
    pub fn range(start: i64, end: i64) -> Self {
        let data: Container = if start <= end {
            (start..=end).map(Value::Int).collect()
        } else {
            (end..=start).rev().map(Value::Int).collect()
        };
        Self::new(data)
    }

    /// Like [`ArrayWrap::range`], visiting every `step`-th number.
    ///
    /// The sign of `step` is ignored; the direction comes from the bounds.
    /// A zero step fails with [`Error::InvalidInput`].
    pub fn range_step(start: i64, end: i64, step: i64) -> Result<Self> {
        if step == 0 {
            return Err(Error::InvalidInput {
                expected: "a non-zero step",
                found: EcoString::from("0"),
            });
        }
        let step = step.unsigned_abs();
        let count = start.abs_diff(end) / step + 1;
        let mut data = Container::with_capacity(usize::try_from(count).unwrap_or(0));
        let mut current = start;
        for _ in 0..count {
            data.push(current);
            // In range by construction of `count`, except after the last item
            current = if start <= end {
                current.wrapping_add_unsigned(step)
            } else {
                current.wrapping_sub_unsigned(step)
            };
        }
        Ok(Self::new(data))
    }

    // ============================================================================
    // The underlying container
    // ============================================================================

    pub fn raw(&self) -> &Container {
        &self.data
    }

    pub fn into_raw(self) -> Container {
        self.data
    }

    pub fn has(&self, key: impl Into<Key>) -> bool {
        self.data.has(key)
    }

    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) {
        self.data.set(key, value);
    }

    pub fn delete(&mut self, key: impl Into<Key>) -> Option<Value> {
        self.data.delete(key)
    }

    pub fn iter(&self) -> arraywrap_values::Iter<'_> {
        self.data.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<K: Into<Key>> Index<K> for ArrayWrap {
    type Output = Value;

    fn index(&self, key: K) -> &Value {
        &self.data[key]
    }
}

impl fmt::Debug for ArrayWrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayWrap{:?}", self.data)
    }
}

impl From<Container> for ArrayWrap {
    fn from(data: Container) -> Self {
        Self::new(data)
    }
}

impl TryFrom<Value> for ArrayWrap {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::create(value)
    }
}

impl From<ArrayWrap> for Value {
    fn from(wrap: ArrayWrap) -> Self {
        Value::Array(wrap.data)
    }
}

impl From<&ArrayWrap> for Value {
    fn from(wrap: &ArrayWrap) -> Self {
        Value::Array(wrap.data.clone())
    }
}

impl From<ArrayWrap> for Container {
    fn from(wrap: ArrayWrap) -> Self {
        wrap.data
    }
}

impl<'a> IntoIterator for &'a ArrayWrap {
    type Item = (&'a Key, &'a Value);
    type IntoIter = arraywrap_values::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for ArrayWrap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromIterator<Value> for ArrayWrap {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Append to `out` the way merges and renumbering copies do: integer keys
/// take the next free index, string keys are set (overwriting in place).
fn append_renumbered(out: &mut Container, key: Key, value: Value) {
    match key {
        Key::Int(_) => {
            out.push(value);
        }
        key @ Key::Str(_) => out.set(key, value),
    }
}
