use std::sync::Arc;

use pretty_assertions::assert_eq;

use crate::{Env, Thunk};

#[test]
fn untied_placeholder_is_empty() {
    let env = Env::new();
    let knot = env.knot::<i64>();
    assert!(knot.placeholder().force().is_none());
    // nothing was cached for the placeholder
    assert_eq!(env.cache_len(), 0);
}

#[test]
fn placeholder_follows_target() {
    let env = Env::new();
    let knot = env.knot();
    let placeholder = knot.placeholder();
    let list = knot.tie(env.list([1, 2]));

    assert_eq!(placeholder.iter().collect::<Vec<_>>(), vec![1, 2]);
    match (placeholder.force(), list.force()) {
        (Some(a), Some(b)) => assert!(Arc::ptr_eq(&a, &b)),
        other => panic!("expected shared cells, got {other:?}"),
    }
}

#[test]
fn cyclic_list_of_ones() {
    let env = Env::new();
    let knot = env.knot();
    let placeholder = knot.placeholder();
    let ones = knot.tie(env.link(1, placeholder));
    assert_eq!(ones.iter().take(4).collect::<Vec<_>>(), vec![1, 1, 1, 1]);
    // the cycle revisits one cell
    assert_eq!(env.cache_len(), 1);
}

#[test]
fn cycle_through_placeholder_keeps_identity() {
    let env = Env::new();
    let knot = env.knot();
    let placeholder = knot.placeholder();
    let ab = knot.tie(env.link('a', env.link('b', placeholder.clone())));

    let third = ab.tail().and_then(|t| t.tail());
    assert_eq!(third.map(|t| t.id()), Some(placeholder.id()));
    assert_eq!(ab.iter().take(5).collect::<String>(), "ababa");
}

#[test]
fn tying_to_own_placeholder_is_refused() {
    let env = Env::new();
    let knot = env.knot::<i64>();
    let placeholder = knot.placeholder();
    let tied = knot.tie(placeholder.clone());
    assert_eq!(tied.id(), placeholder.id());
    assert!(tied.force().is_none());
}

#[test]
fn knot_into_empty() {
    let env = Env::new();
    let knot = env.knot::<i64>();
    let placeholder = knot.placeholder();
    knot.tie(Thunk::empty());
    assert!(placeholder.force().is_none());
}

#[test]
fn tied_cycle_does_not_keep_env_alive() {
    let env = Env::new();
    let handle = env.handle();
    let knot = env.knot();
    let placeholder = knot.placeholder();
    let ones = knot.tie(env.link(1, placeholder));
    assert_eq!(ones.iter().take(3).collect::<Vec<_>>(), vec![1, 1, 1]);

    drop(env);
    assert!(!handle.is_live());
    assert_eq!(ones.iter().take(3).collect::<Vec<_>>(), vec![1, 1, 1]);
}
