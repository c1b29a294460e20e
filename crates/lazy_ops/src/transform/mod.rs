//! Element-wise transformations and folds over a single list.

use std::sync::Arc;

use lazy_core::{Element, Pair, Thunk};

use crate::nary::{map_n, reduce_n};
use crate::Predicate;

pub(crate) fn map<T, U, F>(list: &Thunk<T>, f: F) -> Thunk<U>
where
    T: Element,
    U: Element,
    F: Fn(&T) -> U + Send + Sync + 'static,
{
    map_n(move |heads: &[T]| f(&heads[0]), vec![list.clone()])
}

/// Filtering a single list skips directly over its cells rather than building
/// one-element tuples.
pub(crate) fn filter<T, F>(list: &Thunk<T>, pred: F) -> Thunk<T>
where
    T: Element,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    filtering(list, Arc::new(pred))
}

fn filtering<T: Element>(list: &Thunk<T>, pred: Predicate<T>) -> Thunk<T> {
    let Some(env) = list.env() else {
        return Thunk::empty();
    };
    let source = list.clone();
    env.deferred(move || {
        let mut cursor = source.clone();
        loop {
            let cell = cursor.force()?;
            if pred(&cell.head) {
                let rest = filtering(&cell.tail, Arc::clone(&pred));
                return Some(Pair::shared(cell.head.clone(), rest));
            }
            cursor = cell.tail.clone();
        }
    })
}

pub(crate) fn reduce<T, A, F>(list: &Thunk<T>, mut f: F, initial: A) -> A
where
    T: Element,
    F: FnMut(A, &T) -> A,
{
    reduce_n(
        move |acc, heads: &[T]| f(acc, &heads[0]),
        initial,
        vec![list.clone()],
    )
}

/// Forcing the result folds the whole of `list` onto an accumulator once; the
/// reversed cells are then shared by every later force.
pub(crate) fn reverse<T: Element>(list: &Thunk<T>) -> Thunk<T> {
    let Some(env) = list.env() else {
        return Thunk::empty();
    };
    let source = list.clone();
    let builder = env.clone();
    env.deferred(move || {
        reduce(
            &source,
            |reversed, item: &T| builder.link(item.clone(), reversed),
            Thunk::empty(),
        )
        .force()
    })
}

#[cfg(test)]
mod tests;
