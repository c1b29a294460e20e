use super::*;
use crate::ListOps;
use lazy_core::{list, values, Env, Value};
use pretty_assertions::assert_eq;

#[test]
fn map_doubles() {
    let env = Env::new();
    let doubled = map(&list![env; 1, 2, 3], |n| n * 2);
    assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
}

#[test]
fn map_changes_element_type() {
    let env = Env::new();
    let shown = map(&list![env; 1_i32, 22], ToString::to_string);
    assert_eq!(shown.to_vec(), vec!["1".to_string(), "22".to_string()]);
}

#[test]
fn map_of_empty_is_empty() {
    let empty: Thunk<i32> = Thunk::empty();
    assert_eq!(map(&empty, |n| n + 1).length(), 0);
}

#[test]
fn filter_keeps_matches_in_order() {
    let env = Env::new();
    let odd = filter(&list![env; 1, 2, 3, 4, 5], |n| n % 2 == 1);
    assert_eq!(odd.to_vec(), vec![1, 3, 5]);
}

#[test]
fn filter_without_matches_is_empty() {
    let env = Env::new();
    assert_eq!(filter(&list![env; 2, 4], |n| n % 2 == 1).length(), 0);
}

#[test]
fn filter_over_infinite_list() {
    let env = Env::new();
    let naturals = env.updating(0_u32, |n| n + 1);
    let multiples = filter(&naturals, |n| n % 7 == 0);
    assert_eq!(multiples.take(4).to_vec(), vec![0, 7, 14, 21]);
}

#[test]
fn filter_on_values_by_kind() {
    let env = Env::new();
    let mixed = values![env; 1, "a", 2, true];
    let ints = filter(&mixed, |v| v.as_int().is_some());
    assert_eq!(ints.to_vec(), vec![Value::Int(1), Value::Int(2)]);
}

#[test]
fn reduce_folds_left() {
    let env = Env::new();
    let digits = reduce(&list![env; 1, 2, 3], |acc, n| acc * 10 + n, 0);
    assert_eq!(digits, 123);
}

#[test]
fn reduce_of_empty_returns_initial() {
    let empty: Thunk<i32> = Thunk::empty();
    assert_eq!(reduce(&empty, |acc, n| acc + n, 99), 99);
}

#[test]
fn reverse_finite_list() {
    let env = Env::new();
    assert_eq!(reverse(&list![env; 1, 2, 3]).to_vec(), vec![3, 2, 1]);
}

#[test]
fn reverse_of_empty() {
    let empty: Thunk<i32> = Thunk::empty();
    assert!(reverse(&empty).force().is_none());
}

#[test]
fn reverse_twice_is_identity() {
    let env = Env::new();
    let source = list![env; "a", "b", "c"];
    assert_eq!(reverse(&reverse(&source)), source);
}

#[test]
fn reverse_is_lazy() {
    let env = Env::new();
    let naturals = env.updating(0, |n| n + 1);
    // Building the reversal of an infinite list is fine; forcing it is not.
    let reversed = reverse(&naturals);
    assert!(!reversed.is_empty_sentinel());
}
