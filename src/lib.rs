//! arraywrap - chainable array operations for dynamic data
//!
//! # Overview
//!
//! `arraywrap` wraps an ordered key-value container (integer and string keys,
//! insertion order preserved) in a fluent API. It is meant for code that
//! handles loosely typed records such as decoded JSON or form input and wants
//! the usual array toolbox without writing the loops by hand:
//!
//! - Transforms: `map`, `filter`, `flip`, `pad`, `values`, `keys`
//! - Combining: `merge`, `merge_recursive`
//! - Ordering: `sort`, `reverse`, `shuffle`, `unique`
//! - Reductions: `reduce`, `sum`, `avg`, `max`, `min`
//! - Searching: `find`, `index_of`, `search`, `every`, `some`
//! - In-place: `apply`, `walk_recursive`, `push`, `pop`, `shift`, `unshift`
//!
//! # Quick Start
//!
//! ```
//! use arraywrap::{ArrayWrap, Comparison, Number, Value, array};
//!
//! let scores = ArrayWrap::create(array!["ada" => 9, "bob" => "7", "cy" => 9.5])?;
//!
//! assert_eq!(scores.sum(), Number::Float(25.5));
//! assert_eq!(scores.max(), Some(&Value::Float(9.5)));
//!
//! // Immutable operations return new wrappers
//! let ranked = scores.sort(Comparison::Numeric).reverse(false);
//! assert_eq!(ranked.into_raw(), array![9.5, 9, "7"]);
//! # Ok::<(), arraywrap::Error>(())
//! ```
//!
//! # Named callbacks
//!
//! Where a callback is only known by name, resolve it once as a [`Builtin`]:
//!
//! ```
//! use arraywrap::{ArrayWrap, Builtin, array};
//!
//! let trim = Builtin::lookup("trim")?.unary()?;
//! let is_numeric = "is_numeric".parse::<Builtin>()?.predicate()?;
//!
//! let cleaned = ArrayWrap::new(array![" 1 ", "x", "2\n"]).map(trim).filter(is_numeric);
//! assert_eq!(cleaned.into_raw(), array![0 => "1", 2 => "2"]);
//! # Ok::<(), arraywrap::Error>(())
//! ```

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_string, render_error_to};

// Re-export the public API from arraywrap_core
pub use arraywrap_core::{ArrayWrap, Builtin, Error, Result, builtin};

// Re-export the data model
pub use arraywrap_values::{
    self as values, Comparison, Container, Key, NotAContainer, Number, Value, array, compare,
    identical, loose_eq,
};
