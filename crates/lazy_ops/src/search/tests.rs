use super::*;
use crate::ListOps;
use lazy_core::{list, values, Env, Value};
use pretty_assertions::assert_eq;

#[test]
fn any_finds_a_match() {
    let env = Env::new();
    assert!(any(&list![env; 1, 2, 3], |n| *n == 2));
    assert!(!any(&list![env; 1, 2, 3], |n| *n > 3));
}

#[test]
fn any_stops_at_first_match_on_infinite_list() {
    let env = Env::new();
    let naturals = env.updating(0_u64, |n| n + 1);
    assert!(any(&naturals, |n| *n == 1_000));
}

#[test]
fn all_stops_at_first_mismatch_on_infinite_list() {
    let env = Env::new();
    let naturals = env.updating(0_u64, |n| n + 1);
    assert!(!all(&naturals, |n| *n < 10));
}

#[test]
fn any_and_all_on_empty() {
    let empty: Thunk<i32> = Thunk::empty();
    assert!(!any(&empty, |_| true));
    assert!(all(&empty, |_| false));
}

#[test]
fn has_compares_structurally() {
    let env = Env::new();
    let rows = env.list(vec![list![env; 1, 2], list![env; 3]]);
    assert!(rows.has(&list![env; 3]));
    assert!(!rows.has(&list![env; 1]));
}

#[test]
fn has_on_mixed_values() {
    let env = Env::new();
    let mixed = values![env; 1, "two", 3.0];
    assert!(mixed.has(&Value::from("two")));
    assert!(!mixed.has(&Value::from(2)));
}

#[test]
fn at_indexes_from_zero() {
    let env = Env::new();
    let letters = list![env; 'a', 'b', 'c'];
    assert_eq!(at(&letters, 0), Ok('a'));
    assert_eq!(at(&letters, 2), Ok('c'));
}

#[test]
fn at_past_the_end_reports_length() {
    let env = Env::new();
    let letters = list![env; 'a', 'b'];
    assert_eq!(
        at(&letters, 5),
        Err(ListError::IndexOutOfRange { index: 5, len: 2 })
    );
}

#[test]
fn at_error_message() {
    let err = ListError::IndexOutOfRange { index: 3, len: 1 };
    assert_eq!(err.to_string(), "index 3 out of range for list of length 1");
}

#[test]
fn last_of_list() {
    let env = Env::new();
    assert_eq!(last(&list![env; 1, 2, 3]), Some(3));
    assert_eq!(last(&list![env; 7]), Some(7));
}

#[test]
fn last_of_empty_is_none() {
    let empty: Thunk<i32> = Thunk::empty();
    assert_eq!(last(&empty), None);
}

#[test]
fn length_and_to_vec() {
    let env = Env::new();
    let source = list![env; 4, 5, 6];
    assert_eq!(source.length(), 3);
    assert_eq!(source.to_vec(), vec![4, 5, 6]);
    assert_eq!(Thunk::<i32>::empty().length(), 0);
}
