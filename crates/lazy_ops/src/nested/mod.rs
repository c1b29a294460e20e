//! Concatenation: `append` and `flatten`.

use lazy_core::{Element, EnvRef, Pair, Thunk};

/// `front` followed by `back`. Neither list is forced until the result is.
pub fn append<T: Element>(front: &Thunk<T>, back: &Thunk<T>) -> Thunk<T> {
    let Some(env) = front.env() else {
        return back.clone();
    };
    let front = front.clone();
    let back = back.clone();
    env.deferred(move || match front.force() {
        Some(cell) => Some(Pair::shared(cell.head.clone(), append(&cell.tail, &back))),
        None => back.force(),
    })
}

/// Lazily concatenate a list of lists.
///
/// Only the current sub-list is walked, so an infinite sub-list is never left
/// and an infinite outer list is fine as long as sub-lists keep producing.
/// Empty sub-lists are skipped.
pub fn flatten<T: Element>(lists: &Thunk<Thunk<T>>) -> Thunk<T> {
    match lists.env() {
        Some(env) => concat(env, Thunk::empty(), lists.clone()),
        None => Thunk::empty(),
    }
}

fn concat<T: Element>(env: &EnvRef, current: Thunk<T>, rest: Thunk<Thunk<T>>) -> Thunk<T> {
    let next_env = env.clone();
    env.deferred(move || {
        let mut current = current.clone();
        let mut rest = rest.clone();
        loop {
            if let Some(cell) = current.force() {
                let tail = concat(&next_env, cell.tail.clone(), rest);
                return Some(Pair::shared(cell.head.clone(), tail));
            }
            let group = rest.force()?;
            current = group.head.clone();
            rest = group.tail.clone();
        }
    })
}

#[cfg(test)]
mod tests;
