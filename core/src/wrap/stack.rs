use core::mem;

use arraywrap_values::{Container, Value};

use super::{ArrayWrap, append_renumbered};

impl ArrayWrap {
    /// Remove and return the first value, renumbering integer keys.
    pub fn shift(&mut self) -> Option<Value> {
        let (key, value) = self.data.pop_front()?;
        self.data.renumber();
        tracing::debug!(%key, len = self.data.len(), "shift");
        Some(value)
    }

    /// Insert `items` at the front, in order, renumbering integer keys.
    pub fn unshift<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let items = items.into_iter();
        let mut out = Container::with_capacity(self.data.len() + items.size_hint().0);
        for item in items {
            out.push(item);
        }
        let added = out.len();
        for (k, v) in mem::take(&mut self.data) {
            append_renumbered(&mut out, k, v);
        }
        self.data = out;
        tracing::debug!(added, len = self.data.len(), "unshift");
        self
    }

    /// Append `items` at the next free integer index.
    ///
    /// Items that find `i64::MAX` already taken are dropped with a warning.
    pub fn push<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let before = self.data.len();
        for item in items {
            if self.data.push(item).is_none() {
                tracing::warn!("push skipped: no free integer index left");
            }
        }
        tracing::debug!(added = self.data.len() - before, "push");
        self
    }

    /// Remove and return the last value.
    pub fn pop(&mut self) -> Option<Value> {
        let (key, value) = self.data.pop_back()?;
        tracing::debug!(%key, len = self.data.len(), "pop");
        Some(value)
    }
}

#[cfg(test)]
#[path = "stack_test.rs"]
mod stack_test;
