use core::cmp::Ordering;

use arraywrap_values::{Comparison, Container, Value, compare::compare};
use ecow::EcoString;
use hashbrown::HashSet;
use rand::{Rng, seq::SliceRandom};

use super::{ArrayWrap, append_renumbered};

impl ArrayWrap {
    /// Values in ascending order under `how`, keyed `0..n`.
    ///
    /// The sort is stable: values that compare equal keep their relative
    /// order.
    pub fn sort(&self, how: Comparison) -> Self {
        tracing::trace!(len = self.data.len(), ?how, "sort");
        self.sort_by(|a, b| compare(a, b, how))
    }

    /// Values ordered by a caller comparator, keyed `0..n`.
    ///
    /// The comparator need not be a total order (loose comparisons across
    /// types are not); the result is then some stable arrangement.
    pub fn sort_by(&self, mut cmp: impl FnMut(&Value, &Value) -> Ordering) -> Self {
        let values: Vec<&Value> = self.data.values().collect();
        merge_sort(values, &mut cmp).into_iter().cloned().collect()
    }

    /// Entries in reverse order.
    ///
    /// Integer keys are renumbered unless `preserve_keys` is set; string keys
    /// are always kept.
    pub fn reverse(&self, preserve_keys: bool) -> Self {
        let mut out = Container::with_capacity(self.data.len());
        for (k, v) in self.data.iter().rev() {
            if preserve_keys {
                out.set(k.clone(), v.clone());
            } else {
                append_renumbered(&mut out, k.clone(), v.clone());
            }
        }
        Self::new(out)
    }

    /// Values in random order, keyed `0..n`.
    pub fn shuffle(&self) -> Self {
        self.shuffle_with(&mut rand::rng())
    }

    /// Like [`ArrayWrap::shuffle`], drawing from `rng`.
    pub fn shuffle_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut values: Vec<Value> = self.data.values().cloned().collect();
        values.shuffle(rng);
        values.into_iter().collect()
    }

    /// Drop values equal to an earlier one under `how`.
    ///
    /// The first occurrence of each value is kept with its key.
    pub fn unique(&self, how: Comparison) -> Self {
        tracing::trace!(len = self.data.len(), ?how, "unique");
        let mut out = Container::with_capacity(self.data.len());

        if how == Comparison::String {
            // Equal string forms are exactly the duplicates
            let mut seen: HashSet<EcoString> = HashSet::with_capacity(self.data.len());
            for (k, v) in self.data.iter() {
                if seen.insert(v.stringify()) {
                    out.set(k.clone(), v.clone());
                }
            }
            return Self::new(out);
        }

        let mut kept: Vec<&Value> = Vec::with_capacity(self.data.len());
        for (k, v) in self.data.iter() {
            if !kept.iter().any(|seen| how.equal(seen, v)) {
                kept.push(v);
                out.set(k.clone(), v.clone());
            }
        }
        Self::new(out)
    }
}

/// Stable top-down merge sort.
///
/// `slice::sort_by` may panic on comparators that are not total orders.
fn merge_sort<'a, F>(mut values: Vec<&'a Value>, cmp: &mut F) -> Vec<&'a Value>
where
    F: FnMut(&Value, &Value) -> Ordering,
{
    if values.len() <= 1 {
        return values;
    }
    let right = values.split_off(values.len() / 2);
    let left = merge_sort(values, cmp);
    let right = merge_sort(right, cmp);

    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        // Ties take from the left to stay stable
        if cmp(right[j], left[i]) == Ordering::Less {
            out.push(right[j]);
            j += 1;
        } else {
            out.push(left[i]);
            i += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

#[cfg(test)]
#[path = "order_test.rs"]
mod order_test;
