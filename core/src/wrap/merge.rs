use core::mem;

use arraywrap_values::{Container, Key, Value};
use smallvec::SmallVec;

use super::{ArrayWrap, append_renumbered};

/// Merge arguments are few in practice.
type Sources = SmallVec<[Container; 4]>;

fn cast_all<I>(others: I) -> Sources
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    others
        .into_iter()
        .map(|other| Container::cast(other.into()))
        .collect()
}

impl ArrayWrap {
    /// Concatenate this container with each of `others`, left to right.
    ///
    /// Integer keys are renumbered in order. A string key seen again
    /// overwrites the earlier value where it stands. Arguments that are not
    /// arrays are cast first: `null` adds nothing, a scalar adds itself.
    pub fn merge<I>(&self, others: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let sources = cast_all(others);
        let total = self.data.len() + sources.iter().map(Container::len).sum::<usize>();
        tracing::trace!(len = self.data.len(), sources = sources.len(), total, "merge");

        let mut out = Container::with_capacity(total);
        for (k, v) in self.data.iter() {
            append_renumbered(&mut out, k.clone(), v.clone());
        }
        for source in sources {
            for (k, v) in source {
                append_renumbered(&mut out, k, v);
            }
        }
        Self::new(out)
    }

    /// Like [`ArrayWrap::merge`], but string-key collisions keep both sides.
    ///
    /// On a collision the existing value is turned into an array (a scalar,
    /// `null` included, becomes a one-element list) and the incoming value is merged into it
    /// recursively if it is an array or an object, or appended otherwise.
    pub fn merge_recursive<I>(&self, others: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let sources = cast_all(others);
        tracing::trace!(len = self.data.len(), sources = sources.len(), "merge_recursive");

        let mut out = Container::with_capacity(self.data.len());
        merge_into(&mut out, self.data.clone());
        for source in sources {
            merge_into(&mut out, source);
        }
        Self::new(out)
    }
}

fn merge_into(dest: &mut Container, source: Container) {
    for (key, incoming) in source {
        match key {
            Key::Int(_) => {
                dest.push(incoming);
            }
            Key::Str(_) => match dest.get_mut(&key) {
                Some(existing) => {
                    let mut nested = match mem::take(existing) {
                        Value::Null => Container::from([Value::Null]),
                        other => Container::cast(other),
                    };
                    match incoming {
                        incoming @ (Value::Array(_) | Value::Object(_)) => {
                            merge_into(&mut nested, Container::cast(incoming))
                        }
                        scalar => {
                            nested.push(scalar);
                        }
                    }
                    *existing = Value::Array(nested);
                }
                None => dest.set(key, incoming),
            },
        }
    }
}

#[cfg(test)]
#[path = "merge_test.rs"]
mod merge_test;
