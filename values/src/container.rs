//! The ordered key-value container backing every wrapper.
//!
//! Entries are kept in insertion order in a `Vec`, with a `hashbrown` index
//! from key to position for constant-time lookups. Integer keys also drive
//! the *next free index* used when appending, which is one past the largest
//! integer key ever inserted (and never below zero). Once `i64::MAX` is used
//! there is no next free index and appending refuses.

use alloc::vec::{self, Vec};
use core::{fmt, ops::Index, slice};

use hashbrown::HashMap;

use crate::{Key, NotAContainer, Value, value::NULL};

/// An ordered mapping from [`Key`] to [`Value`].
#[derive(Clone)]
pub struct Container {
    entries: Vec<(Key, Value)>,
    index: HashMap<Key, usize>,
    next_index: Option<i64>,
}

static_assertions::assert_impl_all!(Container: Clone, Default, PartialEq, fmt::Debug);

impl Default for Container {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            next_index: Some(0),
        }
    }

    /// Cast any value to a container.
    ///
    /// `null` becomes empty, arrays are taken as they are, objects yield a
    /// copy of their fields and any scalar becomes a one-element list.
    pub fn cast(value: Value) -> Self {
        match value {
            Value::Null => Container::new(),
            Value::Array(c) => c,
            Value::Object(o) => o.as_ref().clone(),
            scalar => {
                let mut c = Container::with_capacity(1);
                c.push(scalar);
                c
            }
        }
    }

    // ============================================================================
    // Key-based access
    // ============================================================================

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when `key` is present, even if it holds `null`.
    pub fn has(&self, key: impl Into<Key>) -> bool {
        self.index.contains_key(&key.into())
    }

    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        let pos = *self.index.get(&key.into())?;
        Some(&self.entries[pos].1)
    }

    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        let pos = *self.index.get(&key.into())?;
        Some(&mut self.entries[pos].1)
    }

    /// Insert at the end, or overwrite in place if `key` is present.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if let Some(&pos) = self.index.get(&key) {
            self.entries[pos].1 = value;
            return;
        }
        self.bump_next_index(&key);
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
    }

    /// Remove `key`, returning its value. Absent keys are a no-op.
    pub fn delete(&mut self, key: impl Into<Key>) -> Option<Value> {
        let pos = self.index.remove(&key.into())?;
        let (_, value) = self.entries.remove(pos);
        for (k, _) in &self.entries[pos..] {
            if let Some(p) = self.index.get_mut(k) {
                *p -= 1;
            }
        }
        Some(value)
    }

    /// Append at the next free integer index and return the key used.
    ///
    /// Returns `None`, leaving the container unchanged, when `i64::MAX` is
    /// already taken.
    pub fn push(&mut self, value: impl Into<Value>) -> Option<Key> {
        let key = Key::Int(self.next_index?);
        self.set(key.clone(), value);
        Some(key)
    }

    /// The key the next [`Container::push`] will use, if any.
    pub fn next_index(&self) -> Option<i64> {
        self.next_index
    }

    fn bump_next_index(&mut self, key: &Key) {
        if let (Key::Int(i), Some(next)) = (key, self.next_index) {
            if *i >= next {
                self.next_index = i.checked_add(1);
            }
        }
    }

    // ============================================================================
    // Positional access
    // ============================================================================

    pub fn first(&self) -> Option<(&Key, &Value)> {
        self.entries.first().map(|(k, v)| (k, v))
    }

    pub fn last(&self) -> Option<(&Key, &Value)> {
        self.entries.last().map(|(k, v)| (k, v))
    }

    /// Position of `key` in insertion order.
    pub fn position(&self, key: impl Into<Key>) -> Option<usize> {
        self.index.get(&key.into()).copied()
    }

    /// Remove and return the first entry.
    pub fn pop_front(&mut self) -> Option<(Key, Value)> {
        if self.entries.is_empty() {
            return None;
        }
        let (key, value) = self.entries.remove(0);
        self.reindex();
        Some((key, value))
    }

    /// Remove and return the last entry, recomputing the next free index.
    pub fn pop_back(&mut self) -> Option<(Key, Value)> {
        let (key, value) = self.entries.pop()?;
        self.index.remove(&key);
        self.next_index = self
            .entries
            .iter()
            .filter_map(|(k, _)| k.as_int())
            .max()
            .map_or(Some(0), |max| max.checked_add(1).map(|next| next.max(0)));
        Some((key, value))
    }

    /// Renumber integer keys from 0 in order; string keys are kept.
    pub fn renumber(&mut self) {
        let mut next = 0;
        for (key, _) in &mut self.entries {
            if key.is_int() {
                *key = Key::Int(next);
                next += 1;
            }
        }
        self.next_index = Some(next);
        self.reindex();
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (pos, (key, _)) in self.entries.iter().enumerate() {
            self.index.insert(key.clone(), pos);
        }
    }

    // ============================================================================
    // Iteration
    // ============================================================================

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterate with mutable access to values. Keys cannot change.
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut {
            inner: self.entries.iter_mut(),
        }
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &Key> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Values in order, owned.
    pub fn into_values(self) -> impl DoubleEndedIterator<Item = Value> + ExactSizeIterator {
        self.entries.into_iter().map(|(_, v)| v)
    }
}

// ============================================================================
// Iterators
// ============================================================================

pub struct Iter<'a> {
    inner: slice::Iter<'a, (Key, Value)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k, v))
    }
}

impl ExactSizeIterator for Iter<'_> {}

pub struct IterMut<'a> {
    inner: slice::IterMut<'a, (Key, Value)>,
}

impl<'a> Iterator for IterMut<'a> {
    type Item = (&'a Key, &'a mut Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (&*k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for IterMut<'_> {}

impl IntoIterator for Container {
    type Item = (Key, Value);
    type IntoIter = vec::IntoIter<(Key, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collect entries; a repeated key overwrites the earlier value in place.
impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Container {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut c = Container::with_capacity(iter.size_hint().0);
        for (k, v) in iter {
            c.set(k, v);
        }
        c
    }
}

/// Collect values as a list keyed `0..n`.
impl FromIterator<Value> for Container {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut c = Container::with_capacity(iter.size_hint().0);
        for v in iter {
            c.push(v);
        }
        c
    }
}

impl<T: Into<Value>> From<Vec<T>> for Container {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().map(Into::<Value>::into).collect()
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Container {
    fn from(values: [T; N]) -> Self {
        values.into_iter().map(Into::<Value>::into).collect()
    }
}

impl TryFrom<Value> for Container {
    type Error = NotAContainer;

    /// Only arrays convert; use [`Container::cast`] to coerce other values.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(c) => Ok(c),
            other => Err(NotAContainer {
                found: other.kind_name(),
            }),
        }
    }
}

impl<K: Into<Key>> Index<K> for Container {
    type Output = Value;

    /// Absent keys read as `null`.
    fn index(&self, key: K) -> &Value {
        self.get(key).unwrap_or(NULL)
    }
}

/// Order-sensitive: equal containers hold equal entries in the same order.
impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {:?}", key, value)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
#[path = "container_test.rs"]
mod container_test;
