//! Tests for reductions and aggregates

use super::*;
use crate::{Builtin, array};
use pretty_assertions::assert_eq;

#[test]
fn test_reduce_in_order() {
    let subject = ArrayWrap::new(array![1, 2, 3]);
    let total = subject.reduce(|acc: i64, v| acc + v.as_int().unwrap(), 0);
    assert_eq!(total, 6);

    let joined = subject.reduce(|acc: String, v| acc + v.stringify().as_str(), String::new());
    assert_eq!(joined, "123");
}

#[test]
fn test_reduce_right() {
    let subject = ArrayWrap::new(array!["t", "s", "e", "t"]);
    let word = subject.reduce_right(|acc: String, c| acc + c.as_str().unwrap(), String::new());
    assert_eq!(word, "test");
}

#[test]
fn test_reduce_with_builtin() {
    let max = Builtin::lookup("max").unwrap().binary().unwrap();
    let subject = ArrayWrap::new(array![3, 9, 4]);
    assert_eq!(subject.reduce(&max, Value::Null), Value::Int(9));
    assert_eq!(ArrayWrap::default().reduce(max, Value::Null), Value::Null);
}

#[test]
fn test_sum_and_avg() {
    let subject = ArrayWrap::new(array![1, 2, 3]);
    assert_eq!(subject.sum(), Number::Int(6));
    assert_eq!(subject.avg(), Ok(Number::Int(2)));

    let uneven = ArrayWrap::new(array![1, 2]);
    assert_eq!(uneven.avg(), Ok(Number::Float(1.5)));
}

#[test]
fn test_sum_coerces_and_skips() {
    let subject = ArrayWrap::new(array![1, "2", 0.5, true, Value::Null, array![10], "x"]);
    assert_eq!(subject.sum(), Number::Float(4.5));
    assert_eq!(ArrayWrap::default().sum(), Number::Int(0));
}

#[test]
fn test_product() {
    assert_eq!(ArrayWrap::new(array![2, "3", 4]).product(), Number::Int(24));
    assert_eq!(ArrayWrap::default().product(), Number::Int(1));
    assert_eq!(ArrayWrap::new(array![2, "abc"]).product(), Number::Int(0));
    assert_eq!(ArrayWrap::new(array![2, Value::Null]).product(), Number::Int(0));
    assert_eq!(ArrayWrap::new(array![2, array![5], 3]).product(), Number::Int(6));
    assert_eq!(
        ArrayWrap::new(array![i64::MAX, 2]).product(),
        Number::Float(i64::MAX as f64 * 2.0)
    );
}

#[test]
fn test_avg_of_empty_is_an_error() {
    assert_eq!(
        ArrayWrap::default().avg(),
        Err(Error::EmptyAggregate { operation: "avg" })
    );
}

#[test]
fn test_max_and_min() {
    let subject = ArrayWrap::new(array![3, "12", 7.5, -1]);
    assert_eq!(subject.max(), Some(&Value::from("12")));
    assert_eq!(subject.min(), Some(&Value::Int(-1)));
    assert_eq!(ArrayWrap::default().max(), None);
    assert_eq!(ArrayWrap::default().min(), None);
}

#[test]
fn test_max_keeps_first_of_equals() {
    let subject = ArrayWrap::new(array![1, "1", 1.0]);
    assert_eq!(subject.max(), Some(&Value::Int(1)));
    assert_eq!(subject.min(), Some(&Value::Int(1)));
}

#[test]
fn test_count_and_length() {
    let subject = ArrayWrap::new(array!["a" => Value::Null, "b" => array![1, 2]]);
    assert_eq!(subject.count(), 2);
    assert_eq!(subject.length(), 2);
}
