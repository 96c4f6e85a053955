//! Tests for sorting, reversing, shuffling and de-duplication

use super::*;
use crate::array;
use pretty_assertions::assert_eq;
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn test_sort_regular() {
    let subject = ArrayWrap::new(array!["b" => 3, "a" => "10", "c" => 2.5]);
    assert_eq!(
        subject.sort(Comparison::Regular).into_raw(),
        array![2.5, 3, "10"]
    );
}

#[test]
fn test_sort_string_and_natural() {
    let subject = ArrayWrap::new(array!["img12", "img10", "IMG2", "img1"]);
    assert_eq!(
        subject.sort(Comparison::String).into_raw(),
        array!["IMG2", "img1", "img10", "img12"]
    );
    assert_eq!(
        subject.sort(Comparison::NaturalCaseInsensitive).into_raw(),
        array!["img1", "IMG2", "img10", "img12"]
    );
}

#[test]
fn test_sort_is_stable() {
    let subject = ArrayWrap::new(array!["1", 1, 1.0, true]);
    // All loosely equal, so the input order survives
    assert_eq!(
        subject.sort(Comparison::Regular).into_raw(),
        array!["1", 1, 1.0, true]
    );
}

#[test]
fn test_sort_by() {
    let subject = ArrayWrap::new(array!["ccc", "a", "bb"]);
    let by_len = subject.sort_by(|a, b| a.stringify().len().cmp(&b.stringify().len()));
    assert_eq!(by_len.into_raw(), array!["a", "bb", "ccc"]);
}

#[test]
fn test_reverse() {
    let subject = ArrayWrap::new(array![0 => "a", "k" => "b", 1 => "c"]);
    assert_eq!(
        subject.reverse(false).into_raw(),
        array![0 => "c", "k" => "b", 1 => "a"]
    );
    assert_eq!(
        subject.reverse(true).into_raw(),
        array![1 => "c", "k" => "b", 0 => "a"]
    );
}

#[test]
fn test_shuffle_permutes_values() {
    let subject = ArrayWrap::range(1, 20);
    let shuffled = subject.shuffle_with(&mut StdRng::seed_from_u64(7));

    assert_eq!(shuffled.count(), 20);
    assert_eq!(shuffled.keys().into_raw(), ArrayWrap::range(0, 19).into_raw());
    assert_eq!(shuffled.sort(Comparison::Regular), subject);

    // The same seed gives the same order
    let again = subject.shuffle_with(&mut StdRng::seed_from_u64(7));
    assert_eq!(shuffled, again);
    assert_eq!(subject.shuffle().count(), 20);
}

#[test]
fn test_unique_keeps_first_occurrence() {
    let subject = ArrayWrap::new(array!["a" => "green", 0 => "red", "b" => "green", 1 => "blue", 2 => "red"]);
    assert_eq!(
        subject.unique(Comparison::String).into_raw(),
        array!["a" => "green", 0 => "red", 1 => "blue"]
    );
}

#[test]
fn test_unique_strategies() {
    let subject = ArrayWrap::new(array![4, "4", "3", 4.0, 3]);

    assert_eq!(
        subject.unique(Comparison::Regular).into_raw(),
        array![0 => 4, 2 => "3"]
    );
    assert_eq!(
        subject.unique(Comparison::Strict).into_raw(),
        array![0 => 4, 1 => "4", 2 => "3", 3 => 4.0, 4 => 3]
    );
    assert_eq!(
        subject.unique(Comparison::String).into_raw(),
        array![0 => 4, 2 => "3"]
    );
}

#[test]
fn test_sort_tolerates_mixed_types() {
    // Loose ordering across these is not transitive
    let subject = ArrayWrap::new(array!["abc", 0, "1", true, array![], Value::Null, 1.5, "10"]);
    let sorted = subject.sort(Comparison::Regular);
    assert_eq!(sorted.count(), subject.count());
    assert!(sorted.every(|v, _, _| subject.includes(v)));
}
