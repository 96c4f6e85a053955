use core::cmp::Ordering;

use arraywrap_values::{Number, Value, compare::loose_cmp};

use super::ArrayWrap;
use crate::{Error, Result};

impl ArrayWrap {
    /// Left fold over the values in order.
    pub fn reduce<T>(&self, f: impl FnMut(T, &Value) -> T, seed: T) -> T {
        self.data.values().fold(seed, f)
    }

    /// Fold over the values from last to first.
    pub fn reduce_right<T>(&self, f: impl FnMut(T, &Value) -> T, seed: T) -> T {
        self.data.values().rev().fold(seed, f)
    }

    /// Sum of the numeric forms of the values. Arrays and objects are
    /// skipped; the empty sum is `0`.
    pub fn sum(&self) -> Number {
        self.scalars()
            .map(Value::to_number)
            .fold(Number::Int(0), Number::add)
    }

    /// Product of the numeric forms of the values. Arrays and objects are
    /// skipped and non-numeric strings count as 0; the empty product is `1`.
    pub fn product(&self) -> Number {
        self.scalars()
            .map(Value::to_number)
            .fold(Number::Int(1), Number::mul)
    }

    fn scalars(&self) -> impl Iterator<Item = &Value> {
        self.data
            .values()
            .filter(|v| !matches!(v, Value::Array(_) | Value::Object(_)))
    }

    /// Arithmetic mean; integral when the division is exact.
    pub fn avg(&self) -> Result<Number> {
        let count = i64::try_from(self.data.len()).unwrap_or(i64::MAX);
        self.sum()
            .div(Number::Int(count))
            .ok_or(Error::EmptyAggregate { operation: "avg" })
    }

    /// The largest value under loose ordering. Ties keep the earliest.
    pub fn max(&self) -> Option<&Value> {
        self.extreme(Ordering::Greater)
    }

    /// The smallest value under loose ordering. Ties keep the earliest.
    pub fn min(&self) -> Option<&Value> {
        self.extreme(Ordering::Less)
    }

    fn extreme(&self, wanted: Ordering) -> Option<&Value> {
        self.data.values().fold(None, |best, candidate| match best {
            Some(best) if loose_cmp(candidate, best) != wanted => Some(best),
            _ => Some(candidate),
        })
    }

    pub fn count(&self) -> usize {
        self.data.len()
    }

    pub fn length(&self) -> usize {
        self.count()
    }
}

#[cfg(test)]
#[path = "fold_test.rs"]
mod fold_test;
