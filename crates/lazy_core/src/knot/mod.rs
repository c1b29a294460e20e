//! Placeholders for self-referential lists.
//!
//! A list defined in terms of itself needs a handle to itself before it
//! exists. A [`Knot`] hands out that handle up front as a placeholder thunk;
//! the definition is built against the placeholder and then tied back:
//!
//! ```text
//! let knot = env.knot();
//! let fib = knot.placeholder();
//! let sums = map_n(|xs| xs[0] + xs[1], vec![fib.clone(), fib.drop(1)]);
//! let fib = knot.tie(env.link(1, env.link(1, sums)));
//! ```
//!
//! Building the definition must not force the placeholder; only forcing the
//! tied list later does. Forcing a placeholder answers with its target's
//! memoized cell, so both handles see the same pairs.
//!
//! A tied knot is a reference cycle (placeholder, target, placeholder) and is
//! never freed. It holds its environment only weakly, so the cache still goes
//! away with the last [`Env`](crate::Env).

use std::sync::{Arc, OnceLock};

use crate::env::EnvRef;
use crate::thunk::{Body, Thunk};
use crate::Element;

/// One-shot placeholder cell. Tying consumes the knot.
pub struct Knot<T: Element> {
    placeholder: Thunk<T>,
    target: Arc<OnceLock<Thunk<T>>>,
}

impl<T: Element> Knot<T> {
    pub(crate) fn new(env: &EnvRef) -> Self {
        let target = Arc::new(OnceLock::new());
        let placeholder = Thunk::with_body(env.clone(), Body::Knot(Arc::clone(&target)));
        Knot {
            placeholder,
            target,
        }
    }

    /// The thunk that stands for the list until it is tied.
    pub fn placeholder(&self) -> Thunk<T> {
        self.placeholder.clone()
    }

    /// Point the placeholder at `target` and return `target`.
    ///
    /// Tying a knot to its own placeholder would make forcing it loop, so
    /// that is refused and the placeholder stays an empty list.
    pub fn tie(self, target: Thunk<T>) -> Thunk<T> {
        if target.id() == self.placeholder.id() {
            tracing::warn!(id = %target.id(), "refusing to tie a knot to its own placeholder");
            return target;
        }
        // `self` is consumed here, so the cell has never been set.
        let _ = self.target.set(target.clone());
        target
    }
}

#[cfg(test)]
mod tests;
