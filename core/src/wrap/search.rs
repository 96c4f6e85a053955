use arraywrap_values::{Key, Value, identical, loose_eq};

use super::ArrayWrap;

impl ArrayWrap {
    /// The first value for which `f(value, key, self)` holds.
    pub fn find(&self, mut f: impl FnMut(&Value, &Key, &Self) -> bool) -> Option<&Value> {
        self.data
            .iter()
            .find(|&(k, v)| f(v, k, self))
            .map(|(_, v)| v)
    }

    /// The key of the first value for which `f(value, key, self)` holds.
    pub fn find_index(&self, mut f: impl FnMut(&Value, &Key, &Self) -> bool) -> Option<Key> {
        self.data
            .iter()
            .find(|&(k, v)| f(v, k, self))
            .map(|(k, _)| k.clone())
    }

    /// The key of the first value identical to `needle`.
    pub fn index_of(&self, needle: impl Into<Value>) -> Option<Key> {
        self.search(needle, true)
    }

    /// The key of the last value identical to `needle`.
    pub fn last_index_of(&self, needle: impl Into<Value>) -> Option<Key> {
        let needle = needle.into();
        self.data
            .iter()
            .rev()
            .find(|&(_, v)| identical(v, &needle))
            .map(|(k, _)| k.clone())
    }

    /// The key of the first value equal to `needle`, strictly or loosely.
    pub fn search(&self, needle: impl Into<Value>, strict: bool) -> Option<Key> {
        let needle = needle.into();
        let matches = |v: &Value| {
            if strict {
                identical(v, &needle)
            } else {
                loose_eq(v, &needle)
            }
        };
        self.data
            .iter()
            .find(|&(_, v)| matches(v))
            .map(|(k, _)| k.clone())
    }

    /// Whether some value is identical to `value`.
    pub fn includes(&self, value: impl Into<Value>) -> bool {
        self.index_of(value).is_some()
    }

    pub fn in_array(&self, value: impl Into<Value>) -> bool {
        self.includes(value)
    }

    /// Whether `key` is present, even when it holds `null`.
    pub fn has_key(&self, key: impl Into<Key>) -> bool {
        self.data.has(key)
    }

    pub fn key_exists(&self, key: impl Into<Key>) -> bool {
        self.has_key(key)
    }

    /// Whether `f` holds for every entry. Stops at the first failure; true
    /// when empty.
    pub fn every(&self, mut f: impl FnMut(&Value, &Key, &Self) -> bool) -> bool {
        self.data.iter().all(|(k, v)| f(v, k, self))
    }

    /// Whether `f` holds for some entry. Stops at the first success.
    pub fn some(&self, mut f: impl FnMut(&Value, &Key, &Self) -> bool) -> bool {
        self.data.iter().any(|(k, v)| f(v, k, self))
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;
