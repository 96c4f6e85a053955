use arraywrap_values::{Container, Key, Value};

use super::{ArrayWrap, append_renumbered};

impl ArrayWrap {
    /// The most entries a single [`ArrayWrap::pad`] will add.
    pub const MAX_PAD: usize = 1 << 20;

    /// Apply `f` to every value, keeping keys.
    pub fn map(&self, mut f: impl FnMut(&Value) -> Value) -> Self {
        tracing::trace!(len = self.data.len(), "map");
        self.data
            .iter()
            .map(|(k, v)| (k.clone(), f(v)))
            .collect()
    }

    /// Like [`ArrayWrap::map`], with the key passed alongside the value.
    pub fn map_with_key(&self, mut f: impl FnMut(&Value, &Key) -> Value) -> Self {
        tracing::trace!(len = self.data.len(), "map_with_key");
        self.data
            .iter()
            .map(|(k, v)| (k.clone(), f(v, k)))
            .collect()
    }

    /// Visit every slot in place. The visitor may overwrite the value.
    pub fn walk(&mut self, mut f: impl FnMut(&mut Value, &Key)) -> &mut Self {
        tracing::debug!(len = self.data.len(), "walk");
        for (k, v) in self.data.iter_mut() {
            f(v, k);
        }
        self
    }

    pub fn apply(&mut self, f: impl FnMut(&mut Value, &Key)) -> &mut Self {
        self.walk(f)
    }

    /// Visit every leaf in place, descending into nested arrays.
    ///
    /// Objects count as leaves. The key passed is the leaf's own key within
    /// its innermost array.
    pub fn walk_recursive(&mut self, mut f: impl FnMut(&mut Value, &Key)) -> &mut Self {
        tracing::debug!(len = self.data.len(), "walk_recursive");
        walk_leaves(&mut self.data, &mut f);
        self
    }

    pub fn apply_recursive(&mut self, f: impl FnMut(&mut Value, &Key)) -> &mut Self {
        self.walk_recursive(f)
    }

    // ============================================================================
    // Filtering
    // ============================================================================

    /// Keep the entries whose value satisfies `f`, keys preserved.
    pub fn filter(&self, mut f: impl FnMut(&Value) -> bool) -> Self {
        self.filter_with_key(|v, _| f(v))
    }

    /// Keep the truthy values, keys preserved.
    pub fn filter_truthy(&self) -> Self {
        self.filter_with_key(|v, _| v.is_truthy())
    }

    pub fn filter_with_key(&self, mut f: impl FnMut(&Value, &Key) -> bool) -> Self {
        tracing::trace!(len = self.data.len(), "filter");
        self.data
            .iter()
            .filter(|&(k, v)| f(v, k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    // ============================================================================
    // Reshaping
    // ============================================================================

    /// The values, keyed `0..n`.
    pub fn values(&self) -> Self {
        self.data.values().cloned().collect()
    }

    /// The keys as values, keyed `0..n`.
    pub fn keys(&self) -> Self {
        self.data.keys().cloned().map(Value::from).collect()
    }

    /// Swap keys and values.
    ///
    /// Only integer and string values can become keys; other entries are
    /// dropped with a warning. A repeated value keeps the position of its
    /// first occurrence and the key of its last.
    pub fn flip(&self) -> Self {
        let mut out = Container::with_capacity(self.data.len());
        for (k, v) in self.data.iter() {
            match v {
                Value::Int(i) => out.set(*i, k.clone()),
                Value::Str(s) => out.set(s.clone(), k.clone()),
                other => {
                    tracing::warn!(
                        key = %k,
                        kind = other.kind_name(),
                        "flip: can only flip string and integer values, entry skipped"
                    );
                }
            }
        }
        Self::new(out)
    }

    /// Pad to `|size|` entries with copies of `value`.
    ///
    /// A positive size pads at the end, a negative one at the front. When
    /// padding happens integer keys are renumbered; a container that is
    /// already long enough is returned as is. A pad adding more than
    /// [`ArrayWrap::MAX_PAD`] entries is refused with a warning and also
    /// returns a copy.
    pub fn pad(&self, size: i64, value: impl Into<Value>) -> Self {
        let target = usize::try_from(size.unsigned_abs()).unwrap_or(usize::MAX);
        let len = self.data.len();
        if target <= len {
            return self.clone();
        }
        let fill = target - len;
        if fill > Self::MAX_PAD {
            tracing::warn!(size, len, limit = Self::MAX_PAD, "pad refused: too many entries");
            return self.clone();
        }

        let value = value.into();
        let mut out = Container::with_capacity(target);
        if size < 0 {
            for _ in 0..fill {
                out.push(value.clone());
            }
        }
        for (k, v) in self.data.iter() {
            append_renumbered(&mut out, k.clone(), v.clone());
        }
        if size > 0 {
            for _ in 0..fill {
                out.push(value.clone());
            }
        }
        Self::new(out)
    }
}

fn walk_leaves<F: FnMut(&mut Value, &Key)>(data: &mut Container, f: &mut F) {
    for (k, v) in data.iter_mut() {
        match v {
            Value::Array(inner) => walk_leaves(inner, f),
            leaf => f(leaf, k),
        }
    }
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;
