//! Integration tests for the container and comparison rules.

use arraywrap_values::{
    Comparison, Container, Key, NotAContainer, Number, Value, array, compare::compare, identical,
    loose_eq,
};
use core::cmp::Ordering;
use pretty_assertions::assert_eq;

#[test]
fn test_has_distinguishes_null_from_absent() {
    let mut c = array!["set" => Value::Null];
    assert!(c.has("set"));
    assert_eq!(c.get("set"), Some(&Value::Null));
    assert!(!c.has("unset"));
    assert_eq!(c.get("unset"), None);

    c.delete("set");
    c.delete("set");
    assert!(c.is_empty());
}

#[test]
fn test_insertion_order_survives_overwrites_and_deletes() {
    let mut c = Container::new();
    c.set("b", 1);
    c.set("a", 2);
    c.set(3, 3);
    c.set("b", 10);
    c.delete("a");
    c.push(4);

    let entries: Vec<(Key, Value)> = c.into_iter().collect();
    assert_eq!(
        entries,
        vec![
            (Key::from("b"), Value::Int(10)),
            (Key::Int(3), Value::Int(3)),
            (Key::Int(4), Value::Int(4)),
        ]
    );
}

#[test]
fn test_next_index_never_goes_below_zero() {
    let mut c = array![-7 => "neg"];
    assert_eq!(c.push("x"), Some(Key::Int(0)));
    assert_eq!(c.next_index(), Some(1));
}

#[test]
fn test_cast_and_try_from() {
    assert_eq!(Container::cast(Value::Null), array![]);
    assert_eq!(Container::cast(Value::from("s")), array!["s"]);
    assert_eq!(
        Container::cast(Value::object(array!["id" => 1])),
        array!["id" => 1]
    );
    assert_eq!(
        Container::try_from(Value::Float(1.5)),
        Err(NotAContainer { found: "float" })
    );
}

#[test]
fn test_nested_arrays_copy_by_value() {
    let inner = array![1];
    let mut outer = array!["inner" => inner.clone()];
    let copy = outer.clone();

    if let Some(Value::Array(c)) = outer.get_mut("inner") {
        c.push(2);
    }
    assert_eq!(copy["inner"], Value::from(inner));
    assert_eq!(outer["inner"], Value::from(array![1, 2]));
}

#[test]
fn test_strict_and_loose_equality() {
    let pairs = [
        (Value::Int(1), Value::Float(1.0)),
        (Value::Int(0), Value::Bool(false)),
        (Value::from("1e1"), Value::Int(10)),
        (Value::Null, Value::from("")),
    ];
    for (a, b) in &pairs {
        assert!(loose_eq(a, b), "{a:?} == {b:?}");
        assert!(!identical(a, b), "{a:?} === {b:?}");
    }
    assert!(!loose_eq(&Value::from("abc"), &Value::Int(0)));
}

#[test]
fn test_compare_strategies() {
    let (a, b) = (Value::from("10"), Value::from("9"));
    assert_eq!(compare(&a, &b, Comparison::Regular), Ordering::Greater);
    assert_eq!(compare(&a, &b, Comparison::String), Ordering::Less);
    assert_eq!(compare(&a, &b, Comparison::Natural), Ordering::Greater);
    assert_eq!(
        compare(&Value::from("ABC"), &Value::from("abc"), Comparison::StringCaseInsensitive),
        Ordering::Equal
    );
}

#[test]
fn test_numeric_coercion() {
    assert_eq!(Value::from(" 42 ").to_number(), Number::Int(42));
    assert_eq!(Value::from("4.5").to_number(), Number::Float(4.5));
    assert_eq!(Value::from("nope").to_number(), Number::Int(0));
    assert_eq!(Value::from(array![1]).as_number(), None);
}
