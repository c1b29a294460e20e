//! Combinators over lazy lists.
//!
//! The n-ary building blocks ([`map_n`], [`reduce_n`], [`filter_n`],
//! [`zip_n`], [`flatten`]) take any number of input lists and advance them in
//! lockstep. Everyday single-list operations are methods on [`ListOps`], which
//! is implemented for every [`Thunk`]:
//!
//! ```text
//! use lazy_ops::{Env, ListOps};
//!
//! let env = Env::new();
//! let evens = env.updating(0, |n| n + 1).filter(|n| n % 2 == 0);
//! assert_eq!(evens.take(3).to_vec(), vec![0, 2, 4]);
//! ```
//!
//! Everything that returns a list is lazy. Operations that return a single
//! value (`reduce`, `length`, `any`, `max`, ...) walk the list eagerly and do
//! not terminate on an infinite list unless they can stop early.

pub mod channel;
mod nary;
mod nested;
mod ordering;
mod search;
mod slice;
mod transform;

use std::sync::Arc;

pub use lazy_core::{
    init_tracing, list, values, CacheStats, Element, Env, EnvConfig, EnvRef, Forced, Knot,
    ListError, ListIter, Pair, Thunk, ThunkId, Value,
};
pub use nary::{filter_n, map_n, reduce_n, zip_n};
pub use nested::{append, flatten};
pub use ordering::Extremum;

/// Predicate shared between the cells of a lazily filtered list.
pub(crate) type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Single-list operations, available on every [`Thunk`].
pub trait ListOps<T: Element> {
    /// Apply `f` to every element.
    fn map<U, F>(&self, f: F) -> Thunk<U>
    where
        U: Element,
        F: Fn(&T) -> U + Send + Sync + 'static;

    /// Keep the elements matching `pred`.
    fn filter<F>(&self, pred: F) -> Thunk<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static;

    /// Left fold. Eager.
    fn reduce<A, F>(&self, f: F, initial: A) -> A
    where
        F: FnMut(A, &T) -> A;

    /// Pairs of corresponding elements, as two-element lists.
    fn zip(&self, other: &Thunk<T>) -> Thunk<Thunk<T>>;

    /// The first `n` elements. `take(0)` does not force `self`.
    fn take(&self, n: usize) -> Thunk<T>;

    /// Everything after the first `n` elements.
    fn drop(&self, n: usize) -> Thunk<T>;

    /// The longest prefix whose elements all match `pred`.
    fn take_while<F>(&self, pred: F) -> Thunk<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static;

    /// What remains after skipping the longest prefix matching `pred`.
    fn drop_while<F>(&self, pred: F) -> Thunk<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static;

    /// `self` followed by `other`.
    fn append(&self, other: &Thunk<T>) -> Thunk<T>;

    /// The elements in reverse order. Forcing the result walks all of `self`.
    fn reverse(&self) -> Thunk<T>;

    /// The final element, or `None` for an empty list.
    fn last(&self) -> Option<T>;

    /// Whether any element matches. Stops at the first match.
    fn any<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool;

    /// Whether every element matches. Stops at the first mismatch.
    fn all<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool;

    /// Whether some element equals `value`.
    fn has(&self, value: &T) -> bool
    where
        T: PartialEq;

    /// The greatest element; ties keep the earlier one.
    fn max(&self) -> Extremum<T>
    where
        T: PartialOrd;

    /// The least element; ties keep the earlier one.
    fn min(&self) -> Extremum<T>
    where
        T: PartialOrd;

    /// Structural equality, same as `==`.
    fn equals(&self, other: &Thunk<T>) -> bool
    where
        T: PartialEq;

    fn length(&self) -> usize;

    /// The element at position `index`, counting from zero.
    fn at(&self, index: usize) -> Result<T, ListError>;

    fn to_vec(&self) -> Vec<T>;
}

impl<T: Element> ListOps<T> for Thunk<T> {
    fn map<U, F>(&self, f: F) -> Thunk<U>
    where
        U: Element,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        transform::map(self, f)
    }

    fn filter<F>(&self, pred: F) -> Thunk<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        transform::filter(self, pred)
    }

    fn reduce<A, F>(&self, f: F, initial: A) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        transform::reduce(self, f, initial)
    }

    fn zip(&self, other: &Thunk<T>) -> Thunk<Thunk<T>> {
        zip_n(vec![self.clone(), other.clone()])
    }

    fn take(&self, n: usize) -> Thunk<T> {
        slice::take_prefix(self, n)
    }

    fn drop(&self, n: usize) -> Thunk<T> {
        slice::drop_prefix(self, n)
    }

    fn take_while<F>(&self, pred: F) -> Thunk<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        slice::take_while(self, pred)
    }

    fn drop_while<F>(&self, pred: F) -> Thunk<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        slice::drop_while(self, pred)
    }

    fn append(&self, other: &Thunk<T>) -> Thunk<T> {
        nested::append(self, other)
    }

    fn reverse(&self) -> Thunk<T> {
        transform::reverse(self)
    }

    fn last(&self) -> Option<T> {
        search::last(self)
    }

    fn any<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        search::any(self, pred)
    }

    fn all<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        search::all(self, pred)
    }

    fn has(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        search::any(self, |item| item == value)
    }

    fn max(&self) -> Extremum<T>
    where
        T: PartialOrd,
    {
        ordering::max(self)
    }

    fn min(&self) -> Extremum<T>
    where
        T: PartialOrd,
    {
        ordering::min(self)
    }

    fn equals(&self, other: &Thunk<T>) -> bool
    where
        T: PartialEq,
    {
        self == other
    }

    fn length(&self) -> usize {
        self.iter().count()
    }

    fn at(&self, index: usize) -> Result<T, ListError> {
        search::at(self, index)
    }

    fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

/// Concatenation of a list of lists, as a method.
pub trait NestedOps<T: Element> {
    fn flatten(&self) -> Thunk<T>;
}

impl<T: Element> NestedOps<T> for Thunk<Thunk<T>> {
    fn flatten(&self) -> Thunk<T> {
        nested::flatten(self)
    }
}
