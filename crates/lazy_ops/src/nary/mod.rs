//! N-ary combinators: advance several lists in lockstep.
//!
//! Each step forces one cell of every input. The step fails as soon as any
//! input is exhausted, so results end at the shortest input. Heads reach the
//! user function as a slice in input order.

use std::sync::Arc;

use lazy_core::{Element, EnvRef, Pair, Thunk};
use smallvec::SmallVec;

type SliceFn<T, U> = Arc<dyn Fn(&[T]) -> U + Send + Sync>;

/// One lockstep advance: the heads of every input and their tails.
pub(crate) struct Step<T: Element> {
    pub(crate) heads: SmallVec<[T; 4]>,
    pub(crate) tails: Vec<Thunk<T>>,
}

/// Force one cell of every list. `None` once any of them has ended.
pub(crate) fn step_all<T: Element>(lists: &[Thunk<T>]) -> Option<Step<T>> {
    let mut heads = SmallVec::with_capacity(lists.len());
    let mut tails = Vec::with_capacity(lists.len());
    for list in lists {
        let cell = list.force()?;
        heads.push(cell.head.clone());
        tails.push(cell.tail.clone());
    }
    Some(Step { heads, tails })
}

/// The environment results are built in: the first input that has one.
pub(crate) fn env_of<T: Element>(lists: &[Thunk<T>]) -> Option<EnvRef> {
    lists.iter().find_map(|list| list.env().cloned())
}

/// Lazily apply `f` to the heads of `lists`, step by step.
///
/// `map_n(|xs| xs[0] + xs[1], vec![a, b])` adds two lists element-wise.
pub fn map_n<T, U, F>(f: F, lists: Vec<Thunk<T>>) -> Thunk<U>
where
    T: Element,
    U: Element,
    F: Fn(&[T]) -> U + Send + Sync + 'static,
{
    match env_of(&lists) {
        Some(env) => mapped(&env, Arc::new(f), lists),
        None => Thunk::empty(),
    }
}

fn mapped<T: Element, U: Element>(
    env: &EnvRef,
    f: SliceFn<T, U>,
    lists: Vec<Thunk<T>>,
) -> Thunk<U> {
    let next_env = env.clone();
    env.deferred(move || {
        let Step { heads, tails } = step_all(&lists)?;
        let head = f(heads.as_slice());
        Some(Pair::shared(head, mapped(&next_env, Arc::clone(&f), tails)))
    })
}

/// Eager left fold over the heads of `lists`.
///
/// Does not terminate if every input is infinite.
pub fn reduce_n<T, A, F>(mut f: F, initial: A, lists: Vec<Thunk<T>>) -> A
where
    T: Element,
    F: FnMut(A, &[T]) -> A,
{
    if lists.is_empty() {
        return initial;
    }
    let mut acc = initial;
    let mut cursors = lists;
    while let Some(Step { heads, tails }) = step_all(&cursors) {
        acc = f(acc, heads.as_slice());
        cursors = tails;
    }
    acc
}

/// Lazily keep the head tuples matching `pred`, each yielded as a list.
///
/// Searching for the next match forces as many steps as it takes, so a
/// predicate that never matches again on infinite inputs does not return.
pub fn filter_n<T, F>(pred: F, lists: Vec<Thunk<T>>) -> Thunk<Thunk<T>>
where
    T: Element,
    F: Fn(&[T]) -> bool + Send + Sync + 'static,
{
    match env_of(&lists) {
        Some(env) => filtered(&env, Arc::new(pred), lists),
        None => Thunk::empty(),
    }
}

fn filtered<T: Element>(
    env: &EnvRef,
    pred: SliceFn<T, bool>,
    lists: Vec<Thunk<T>>,
) -> Thunk<Thunk<T>> {
    let next_env = env.clone();
    env.deferred(move || {
        let mut cursors = lists.clone();
        loop {
            let Step { heads, tails } = step_all(&cursors)?;
            if pred(heads.as_slice()) {
                let tuple = next_env.list(heads);
                let rest = filtered(&next_env, Arc::clone(&pred), tails);
                return Some(Pair::shared(tuple, rest));
            }
            cursors = tails;
        }
    })
}

/// Lazily group corresponding elements of `lists` into lists.
pub fn zip_n<T: Element>(lists: Vec<Thunk<T>>) -> Thunk<Thunk<T>> {
    let Some(env) = env_of(&lists) else {
        return Thunk::empty();
    };
    map_n(move |heads: &[T]| env.list(heads.to_vec()), lists)
}
