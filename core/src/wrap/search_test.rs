//! Tests for lookups and predicates

use std::cell::Cell;

use super::*;
use crate::array;
use pretty_assertions::assert_eq;

#[test]
fn test_find() {
    let subject = ArrayWrap::new(array!["a" => 1, "b" => 5, "c" => 8]);
    assert_eq!(subject.find(|v, _, _| v.as_int() > Some(3)), Some(&Value::Int(5)));
    assert_eq!(subject.find(|v, _, _| v.as_int() > Some(10)), None);
}

#[test]
fn test_find_index_receives_key_and_wrapper() {
    let subject = ArrayWrap::new(array!["x" => 10, "y" => 20]);
    let found = subject.find_index(|v, k, wrap| {
        assert_eq!(wrap.get(k), Some(v));
        *k == Key::from("y")
    });
    assert_eq!(found, Some(Key::from("y")));
}

#[test]
fn test_find_index_matches_false_strictly() {
    let subject = ArrayWrap::new(array![0, "", false]);
    let found = subject.find_index(|v, _, _| identical(v, &Value::Bool(false)));
    assert_eq!(found, Some(Key::Int(2)));
    assert_eq!(subject.find_index(|v, _, _| v.is_null()), None);
}

#[test]
fn test_index_of_is_strict() {
    let subject = ArrayWrap::new(array![0, false, ""]);
    assert_eq!(subject.index_of(false), Some(Key::Int(1)));
    assert_eq!(subject.index_of(""), Some(Key::Int(2)));
    assert_eq!(subject.index_of(Value::Null), None);
}

#[test]
fn test_index_of_objects_by_identity() {
    let first = Value::object(array!["id" => 1]);
    let lookalike = Value::object(array!["id" => 1]);
    let subject = ArrayWrap::new(array![first.clone(), lookalike.clone()]);

    assert_eq!(subject.index_of(&first), Some(Key::Int(0)));
    assert_eq!(subject.index_of(&lookalike), Some(Key::Int(1)));
    assert_eq!(subject.index_of(Value::object(array!["id" => 1])), None);
}

#[test]
fn test_last_index_of() {
    let shared = Value::object(array!["id" => 7]);
    let subject = ArrayWrap::new(array![shared.clone(), shared.clone(), "x"]);
    assert_eq!(subject.last_index_of(&shared), Some(Key::Int(1)));
    assert_eq!(subject.last_index_of("y"), None);
}

#[test]
fn test_search_strictness() {
    let subject = ArrayWrap::new(array!["a" => "1", "b" => 1]);
    assert_eq!(subject.search(1, true), Some(Key::from("b")));
    assert_eq!(subject.search(1, false), Some(Key::from("a")));
    assert_eq!(subject.search(2, false), None);
}

#[test]
fn test_includes() {
    let subject = ArrayWrap::new(array![1, "two", Value::Null]);
    assert!(subject.includes(1));
    assert!(subject.in_array("two"));
    assert!(subject.includes(Value::Null));
    assert!(!subject.includes("1"));
}

#[test]
fn test_has_key_with_null_value() {
    let subject = ArrayWrap::new(array!["present" => Value::Null]);
    assert!(subject.has_key("present"));
    assert!(subject.key_exists("present"));
    assert!(!subject.has_key("absent"));
}

#[test]
fn test_every_short_circuits() {
    let subject = ArrayWrap::new(array![0, 1, 2, 3]);
    let calls = Cell::new(0);
    let all_small = subject.every(|v, _, _| {
        calls.set(calls.get() + 1);
        v.as_int() < Some(2)
    });
    assert!(!all_small);
    // Stopped at key 2
    assert_eq!(calls.get(), 3);
    assert!(ArrayWrap::default().every(|_, _, _| false));
}

#[test]
fn test_some_short_circuits() {
    let subject = ArrayWrap::new(array![3, 2, 1]);
    let mut last_key = None;
    let any_small = subject.some(|v, k, _| {
        last_key = Some(k.clone());
        v.as_int() <= Some(2)
    });
    assert!(any_small);
    assert_eq!(last_key, Some(Key::Int(1)));
    assert!(!ArrayWrap::default().some(|_, _, _| true));
}

#[test]
fn test_every_and_some_with_false_values() {
    let subject = ArrayWrap::new(array![false, false]);
    assert!(subject.every(|v, _, _| !v.is_truthy()));
    assert!(!subject.some(|v, _, _| v.is_truthy()));
    assert!(subject.some(|v, _, _| identical(v, &Value::Bool(false))));
}
