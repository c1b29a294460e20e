//! Prefixes and suffixes: `take`, `drop` and their predicate forms.

use std::sync::Arc;

use lazy_core::{Element, Pair, Thunk};

use crate::Predicate;

/// The first `n` elements of `list`.
pub(crate) fn take_prefix<T: Element>(list: &Thunk<T>, n: usize) -> Thunk<T> {
    if n == 0 {
        return Thunk::empty();
    }
    let Some(env) = list.env() else {
        return Thunk::empty();
    };
    let source = list.clone();
    env.deferred(move || {
        let cell = source.force()?;
        Some(Pair::shared(cell.head.clone(), take_prefix(&cell.tail, n - 1)))
    })
}

/// `list` without its first `n` elements.
///
/// The result forces to the very pair found `n` cells in, so it shares
/// identity with the original list from there on.
pub(crate) fn drop_prefix<T: Element>(list: &Thunk<T>, n: usize) -> Thunk<T> {
    if n == 0 {
        return list.clone();
    }
    let Some(env) = list.env() else {
        return Thunk::empty();
    };
    let source = list.clone();
    env.deferred(move || {
        let mut cursor = source.clone();
        for _ in 0..n {
            cursor = cursor.force()?.tail.clone();
        }
        cursor.force()
    })
}

pub(crate) fn take_while<T, F>(list: &Thunk<T>, pred: F) -> Thunk<T>
where
    T: Element,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    taking_while(list, Arc::new(pred))
}

fn taking_while<T: Element>(list: &Thunk<T>, pred: Predicate<T>) -> Thunk<T> {
    let Some(env) = list.env() else {
        return Thunk::empty();
    };
    let source = list.clone();
    env.deferred(move || {
        let cell = source.force()?;
        if !pred(&cell.head) {
            return None;
        }
        let rest = taking_while(&cell.tail, Arc::clone(&pred));
        Some(Pair::shared(cell.head.clone(), rest))
    })
}

pub(crate) fn drop_while<T, F>(list: &Thunk<T>, pred: F) -> Thunk<T>
where
    T: Element,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    let Some(env) = list.env() else {
        return Thunk::empty();
    };
    let source = list.clone();
    env.deferred(move || {
        let mut cursor = source.clone();
        loop {
            let cell = cursor.force()?;
            if !pred(&cell.head) {
                return Some(cell);
            }
            cursor = cell.tail.clone();
        }
    })
}
