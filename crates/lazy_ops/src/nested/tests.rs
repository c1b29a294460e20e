use super::*;
use crate::ListOps;
use lazy_core::{list, Env};
use pretty_assertions::assert_eq;

#[test]
fn append_concatenates() {
    let env = Env::new();
    let joined = append(&list![env; 1, 2], &list![env; 3]);
    assert_eq!(joined.to_vec(), vec![1, 2, 3]);
}

#[test]
fn append_to_empty_is_the_other_list() {
    let env = Env::new();
    let back = list![env; 4, 5];
    let joined = append(&Thunk::empty(), &back);
    assert_eq!(joined.id(), back.id());
}

#[test]
fn append_empty_back() {
    let env = Env::new();
    let joined = append(&list![env; 1, 2], &Thunk::empty());
    assert_eq!(joined.to_vec(), vec![1, 2]);
}

#[test]
fn append_after_infinite_front_stays_lazy() {
    let env = Env::new();
    let ones = env.updating(1, |n| *n);
    let joined = append(&ones, &list![env; 9]);
    assert_eq!(joined.take(4).to_vec(), vec![1, 1, 1, 1]);
}

#[test]
fn flatten_concatenates_sub_lists() {
    let env = Env::new();
    let nested = env.list(vec![list![env; 1, 2], list![env; 3], list![env; 4, 5]]);
    assert_eq!(flatten(&nested).to_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn flatten_skips_empty_sub_lists() {
    let env = Env::new();
    let nested = env.list(vec![
        Thunk::empty(),
        list![env; 1],
        Thunk::empty(),
        Thunk::empty(),
        list![env; 2],
        Thunk::empty(),
    ]);
    assert_eq!(flatten(&nested).to_vec(), vec![1, 2]);
}

#[test]
fn flatten_of_empty_outer_list() {
    let outer: Thunk<Thunk<i32>> = Thunk::empty();
    assert_eq!(flatten(&outer).length(), 0);
}

#[test]
fn flatten_never_leaves_an_infinite_sub_list() {
    let env = Env::new();
    let nested = env.list(vec![env.updating(0, |n| n + 1), list![env; -1]]);
    assert_eq!(flatten(&nested).take(5).to_vec(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn flatten_of_infinite_outer_list() {
    let env = Env::new();
    let builder = env.handle();
    let blocks = env.updating(0, |n| n + 1).map(move |n| builder.list(vec![*n; 2]));
    assert_eq!(
        flatten(&blocks).take(6).to_vec(),
        vec![0, 0, 1, 1, 2, 2]
    );
}
