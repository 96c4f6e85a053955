//! Dynamic values and the ordered container behind `ArrayWrap`.
//!
//! A [`Container`] maps [`Key`]s (integers or strings) to [`Value`]s while
//! preserving insertion order. The [`compare`] module defines the strict and
//! loose equality and ordering rules used by searching, sorting and
//! de-duplication.
//!
//! # Example
//!
//! ```
//! use arraywrap_values::{array, Container, Value};
//!
//! let mut c = array!["foo" => "bar"];
//! c.push(42);
//! assert_eq!(c.get(0), Some(&Value::Int(42)));
//! assert!(c.has("foo"));
//! c.delete("foo");
//! assert_eq!(c.len(), 1);
//! ```

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod compare;
mod container;
mod error;
mod key;
mod macros;
mod numeric;
mod value;

pub use compare::{Comparison, identical, loose_eq};
pub use container::{Container, Iter, IterMut};
pub use error::NotAContainer;
pub use key::Key;
pub use numeric::{Number, parse_numeric};
pub use value::Value;
