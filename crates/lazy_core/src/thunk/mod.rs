//! Thunks and pairs.
//!
//! A [`Thunk`] is a deferred list cell with a process-unique identity. Forcing
//! it yields a [`Pair`] (one element plus the thunk for the rest) or `None` at
//! the end of the list. Thunks are cheap handles: cloning shares the same
//! identity and therefore the same memoized result.
//!
//! # Body kinds
//!
//! | Body | Built by | Forcing |
//! |------|----------|---------|
//! | `Empty` | [`Thunk::empty`] | always `None`, never cached |
//! | `Ready` | [`EnvRef::link`] | head and tail already known |
//! | `Delayed` | [`EnvRef::delayed_link`] | tail thunk produced at force time |
//! | `Deferred` | [`EnvRef::deferred`] | arbitrary computation (combinators) |
//! | `Knot` | [`EnvRef::knot`] | delegates to the tied target |

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::env::EnvRef;
use crate::id::ThunkId;
use crate::iter::ListIter;
use crate::Element;

/// One resolved list cell. Immutable once produced.
pub struct Pair<T: Element> {
    pub head: T,
    pub tail: Thunk<T>,
}

impl<T: Element> Pair<T> {
    pub fn new(head: T, tail: Thunk<T>) -> Self {
        Pair { head, tail }
    }

    /// A fresh cell in the shared form that forcing returns.
    pub fn shared(head: T, tail: Thunk<T>) -> Arc<Self> {
        Arc::new(Pair::new(head, tail))
    }
}

impl<T: Element + fmt::Debug> fmt::Debug for Pair<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pair")
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish()
    }
}

/// Result of forcing a thunk: the cell, or `None` at the end of the list.
///
/// With memoization on, forcing one identity twice returns the same `Arc`.
pub type Forced<T> = Option<Arc<Pair<T>>>;

pub(crate) type EvalFn<T> = Box<dyn Fn() -> Forced<T> + Send + Sync>;
pub(crate) type TailFn<T> = Box<dyn Fn() -> Thunk<T> + Send + Sync>;

pub(crate) enum Body<T: Element> {
    Empty,
    Ready { head: T, tail: Thunk<T> },
    Delayed { head: T, tail_fn: TailFn<T> },
    Deferred(EvalFn<T>),
    Knot(Arc<OnceLock<Thunk<T>>>),
}

struct ThunkInner<T: Element> {
    id: ThunkId,
    /// `None` only for the empty sentinel.
    env: Option<EnvRef>,
    body: Body<T>,
}

/// Handle to a deferred list cell; also the handle to the whole list that
/// starts at this cell.
pub struct Thunk<T: Element> {
    inner: Arc<ThunkInner<T>>,
}

impl<T: Element> Clone for Thunk<T> {
    fn clone(&self) -> Self {
        Thunk {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Element> Thunk<T> {
    /// The end-of-list sentinel. Every sentinel has identity [`ThunkId::EMPTY`].
    pub fn empty() -> Self {
        Thunk {
            inner: Arc::new(ThunkInner {
                id: ThunkId::EMPTY,
                env: None,
                body: Body::Empty,
            }),
        }
    }

    pub(crate) fn with_body(env: EnvRef, body: Body<T>) -> Self {
        Thunk {
            inner: Arc::new(ThunkInner {
                id: ThunkId::fresh(),
                env: Some(env),
                body,
            }),
        }
    }

    #[inline]
    pub fn id(&self) -> ThunkId {
        self.inner.id
    }

    /// Environment this thunk was built in; `None` for the empty sentinel.
    #[inline]
    pub fn env(&self) -> Option<&EnvRef> {
        self.inner.env.as_ref()
    }

    #[inline]
    pub fn is_empty_sentinel(&self) -> bool {
        matches!(self.inner.body, Body::Empty)
    }

    /// Resolve this thunk to its cell, consulting the environment's cache.
    ///
    /// Knot placeholders bypass the cache and answer with their target's
    /// cell, so placeholder and target share one memoized pair.
    pub fn force(&self) -> Forced<T> {
        match (&self.inner.body, &self.inner.env) {
            (Body::Knot(_), _) | (_, None) => self.evaluate(),
            (_, Some(env)) => env.force(self),
        }
    }

    /// Run the body without looking at any cache.
    pub(crate) fn evaluate(&self) -> Forced<T> {
        lazy_stack::ensure_sufficient_stack(|| match &self.inner.body {
            Body::Empty => None,
            Body::Ready { head, tail } => Some(Pair::shared(head.clone(), tail.clone())),
            Body::Delayed { head, tail_fn } => Some(Pair::shared(head.clone(), tail_fn())),
            Body::Deferred(eval) => eval(),
            Body::Knot(cell) => {
                if let Some(target) = cell.get() {
                    target.force()
                } else {
                    tracing::warn!(id = %self.id(), "forced a knot placeholder before it was tied");
                    None
                }
            }
        })
    }

    /// First element, forcing one cell.
    pub fn head(&self) -> Option<T> {
        self.force().map(|cell| cell.head.clone())
    }

    /// Rest of the list after the first element, forcing one cell.
    pub fn tail(&self) -> Option<Thunk<T>> {
        self.force().map(|cell| cell.tail.clone())
    }

    /// The "force one step" contract: head and tail, or `None` at the end.
    pub fn uncons(&self) -> Option<(T, Thunk<T>)> {
        self.force()
            .map(|cell| (cell.head.clone(), cell.tail.clone()))
    }

    /// Pull-based iterator over the elements, forcing one cell per `next`.
    pub fn iter(&self) -> ListIter<T> {
        ListIter::new(self.clone())
    }

    fn kind_name(&self) -> &'static str {
        match self.inner.body {
            Body::Empty => "empty",
            Body::Ready { .. } => "link",
            Body::Delayed { .. } => "delayed",
            Body::Deferred(_) => "deferred",
            Body::Knot(_) => "knot",
        }
    }

    /// Take the tail out of a uniquely owned `Link` cell.
    fn detach_tail(&mut self) -> Option<Thunk<T>> {
        let inner = Arc::get_mut(&mut self.inner)?;
        match &mut inner.body {
            Body::Ready { tail, .. } if !tail.is_empty_sentinel() => {
                Some(std::mem::replace(tail, Thunk::empty()))
            }
            _ => None,
        }
    }
}

/// Unlinks chains of uniquely owned `Link` cells one at a time, so dropping a
/// long finite list does not recurse once per element.
impl<T: Element> Drop for Thunk<T> {
    fn drop(&mut self) {
        let mut next = self.detach_tail();
        while let Some(mut cell) = next {
            next = cell.detach_tail();
        }
    }
}

/// Never forces; lists may be infinite.
impl<T: Element> fmt::Debug for Thunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thunk")
            .field("id", &self.id())
            .field("kind", &self.kind_name())
            .finish()
    }
}

impl<T: Element> IntoIterator for &Thunk<T> {
    type Item = T;
    type IntoIter = ListIter<T>;

    fn into_iter(self) -> ListIter<T> {
        self.iter()
    }
}
