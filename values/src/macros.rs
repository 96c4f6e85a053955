//! Container construction macro.
//!
//! # Example
//!
//! ```
//! use arraywrap_values::{array, Key, Value};
//!
//! // A list, keyed 0..n
//! let list = array![1, 2, "three"];
//! assert_eq!(list[2], Value::from("three"));
//!
//! // Explicit keys, nesting
//! let map = array!["a" => array!["c" => 2], "d" => 3];
//! assert_eq!(map["a"]["c"], Value::Int(2));
//! assert!(map.has(Key::from("d")));
//! ```

/// Build a [`Container`](crate::Container).
///
/// | Pattern | Meaning |
/// |---------|---------|
/// | `array![]` | empty container |
/// | `array![v1, v2, ...]` | list with keys `0..n` |
/// | `array![k1 => v1, k2 => v2, ...]` | explicit keys, in order |
///
/// Keys go through `Into<Key>` and values through `Into<Value>`.
#[macro_export]
macro_rules! array {
    () => {
        $crate::Container::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut __c = $crate::Container::new();
        $(__c.set($key, $value);)+
        __c
    }};

    ($($value:expr),+ $(,)?) => {{
        let mut __c = $crate::Container::new();
        $(__c.push($value);)+
        __c
    }};
}
