//! Chainable array operations over an ordered key-value container.
//!
//! [`ArrayWrap`] wraps a [`Container`] and exposes the familiar array
//! toolbox (map, filter, reduce, merge, sort and friends) as methods. Most
//! operations return a new wrapper and leave the receiver untouched; the few
//! in-place ones (`apply`, `push`, `shift`, ...) take `&mut self`.
//!
//! ```
//! use arraywrap_core::{ArrayWrap, Builtin, array};
//!
//! let upper = Builtin::lookup("strtoupper")?.unary()?;
//! let names = ArrayWrap::new(array!["ada", "grace"]).map(upper);
//! assert_eq!(names.raw(), &array!["ADA", "GRACE"]);
//! # Ok::<(), arraywrap_core::Error>(())
//! ```

pub mod builtin;
pub mod error;
mod wrap;

pub use arraywrap_values::{
    Comparison, Container, Key, Number, Value, array, compare, identical, loose_eq,
};
pub use builtin::Builtin;
pub use error::{Error, Result};
pub use wrap::ArrayWrap;
