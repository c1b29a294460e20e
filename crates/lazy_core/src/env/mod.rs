//! The list evaluation environment.
//!
//! An [`Env`] owns one memoization cache. Thunks remember the environment
//! they were built in, and combinators build their results in the
//! environment of their inputs, so a whole family of lists shares one cache
//! while separate environments (one per test, say) never see each other's
//! entries.
//!
//! # Lifetime
//!
//! Thunks and the closures that build lists lazily hold an [`EnvRef`], which
//! does not keep the environment alive. Dropping the last [`Env`] frees the
//! cache; lists that outlive it still force, just without memoization.
//! Generators should capture [`Env::handle`] rather than a clone of the
//! `Env`, since a cached cell whose closure owns the `Env` keeps it alive.

mod cache;

use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, Weak};

pub use cache::CacheStats;

use crate::config::EnvConfig;
use crate::knot::Knot;
use crate::thunk::{Body, Forced, Thunk};
use crate::Element;
use cache::MemoCache;

struct EnvInner {
    config: EnvConfig,
    cache: MemoCache,
}

impl Drop for EnvInner {
    fn drop(&mut self) {
        tracing::debug!(entries = self.cache.len(), "environment dropped");
    }
}

/// Evaluation environment: owns the memoization cache.
///
/// The list constructors are reached through [`EnvRef`], which `Env`
/// dereferences to.
#[derive(Clone)]
pub struct Env {
    inner: Arc<EnvInner>,
    handle: EnvRef,
}

/// Non-owning handle to an [`Env`], held by thunks.
///
/// Builds lists like the `Env` itself. Once every `Env` is gone, forcing
/// through a handle still works but nothing is memoized.
#[derive(Clone)]
pub struct EnvRef {
    inner: Weak<EnvInner>,
}

impl Env {
    /// Environment with memoization enabled.
    pub fn new() -> Self {
        Env::with_config(EnvConfig::default())
    }

    /// Environment configured from the process environment (`LAZY_MEMO`).
    pub fn from_env() -> Self {
        Env::with_config(EnvConfig::from_env())
    }

    pub fn with_config(config: EnvConfig) -> Self {
        let inner = Arc::new(EnvInner {
            config,
            cache: MemoCache::new(config.memoize),
        });
        let handle = EnvRef {
            inner: Arc::downgrade(&inner),
        };
        Env { inner, handle }
    }

    /// Configuration this environment was created with.
    pub fn config(&self) -> EnvConfig {
        self.inner.config
    }

    /// Whether `other` is a handle to the same environment.
    pub fn same(&self, other: &Env) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// A handle for closures that build lists on demand.
    pub fn handle(&self) -> EnvRef {
        self.handle.clone()
    }

    // Cache lifecycle

    pub fn enable_memo(&self) {
        self.inner.cache.set_enabled(true);
        tracing::debug!(entries = self.cache_len(), "memoization enabled");
    }

    /// Stop consulting and filling the cache. Existing entries are kept.
    pub fn disable_memo(&self) {
        self.inner.cache.set_enabled(false);
        tracing::debug!(entries = self.cache_len(), "memoization disabled");
    }

    /// Remove every cached cell without touching the enabled flag.
    pub fn clear_memo(&self) {
        let dropped = self.inner.cache.clear();
        tracing::debug!(dropped, "memoization cache cleared");
    }

    pub fn is_memoizing(&self) -> bool {
        self.inner.cache.is_enabled()
    }

    pub fn cache_len(&self) -> usize {
        self.inner.cache.len()
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.cache.stats()
    }
}

impl Deref for Env {
    type Target = EnvRef;

    fn deref(&self) -> &EnvRef {
        &self.handle
    }
}

impl EnvRef {
    /// Whether some [`Env`] still owns the environment.
    pub fn is_live(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Whether both handles refer to the same environment.
    pub fn same(&self, other: &EnvRef) -> bool {
        Weak::ptr_eq(&self.inner, &other.inner)
    }

    /// The owning environment, if it is still alive.
    pub fn upgrade(&self) -> Option<Env> {
        let inner = self.inner.upgrade()?;
        Some(Env {
            inner,
            handle: self.clone(),
        })
    }

    // Force engine

    pub(crate) fn force<T: Element>(&self, thunk: &Thunk<T>) -> Forced<T> {
        let Some(inner) = self.inner.upgrade() else {
            return thunk.evaluate();
        };
        let cache = &inner.cache;
        if !cache.is_enabled() {
            return thunk.evaluate();
        }
        if let Some(hit) = cache.lookup::<T>(thunk.id()) {
            return hit;
        }
        let forced = thunk.evaluate();
        cache.store(thunk.id(), forced)
    }

    // Constructors

    /// The end-of-list sentinel.
    #[allow(
        clippy::unused_self,
        reason = "keeps every constructor reachable from the environment"
    )]
    pub fn empty<T: Element>(&self) -> Thunk<T> {
        Thunk::empty()
    }

    /// A cell whose head and tail are already known (`cons`).
    pub fn link<T: Element>(&self, head: T, tail: Thunk<T>) -> Thunk<T> {
        Thunk::with_body(self.clone(), Body::Ready { head, tail })
    }

    /// Like [`EnvRef::link`], but the tail thunk is produced by `tail_fn` when the
    /// cell is forced.
    ///
    /// Use this when the tail comes from a recursive generator, which would
    /// otherwise build the infinite list eagerly:
    ///
    /// ```text
    /// fn integers_from(env: &EnvRef, n: i64) -> Thunk<i64> {
    ///     let next = env.clone();
    ///     env.delayed_link(n, move || integers_from(&next, n + 1))
    /// }
    /// ```
    pub fn delayed_link<T, F>(&self, head: T, tail_fn: F) -> Thunk<T>
    where
        T: Element,
        F: Fn() -> Thunk<T> + Send + Sync + 'static,
    {
        Thunk::with_body(
            self.clone(),
            Body::Delayed {
                head,
                tail_fn: Box::new(tail_fn),
            },
        )
    }

    /// A finite list of `items`, ending in the empty sentinel.
    pub fn list<T, I>(&self, items: I) -> Thunk<T>
    where
        T: Element,
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Thunk::empty(), |tail, head| self.link(head, tail))
    }

    /// The infinite list `initial, step(initial), step(step(initial)), ...`.
    pub fn updating<T, F>(&self, initial: T, step: F) -> Thunk<T>
    where
        T: Element,
        F: Fn(&T) -> T + Send + Sync + 'static,
    {
        self.updating_from(initial, Arc::new(step))
    }

    fn updating_from<T: Element>(
        &self,
        current: T,
        step: Arc<dyn Fn(&T) -> T + Send + Sync>,
    ) -> Thunk<T> {
        let env = self.clone();
        let seed = current.clone();
        self.delayed_link(current, move || {
            env.updating_from(step(&seed), Arc::clone(&step))
        })
    }

    /// A cell computed by `eval` when first forced.
    ///
    /// This is the building block for combinators: `eval` may force other
    /// thunks but must not be called while the result is being constructed.
    pub fn deferred<T, F>(&self, eval: F) -> Thunk<T>
    where
        T: Element,
        F: Fn() -> Forced<T> + Send + Sync + 'static,
    {
        Thunk::with_body(self.clone(), Body::Deferred(Box::new(eval)))
    }

    /// A one-shot placeholder for defining a list in terms of itself.
    pub fn knot<T: Element>(&self) -> Knot<T> {
        Knot::new(self)
    }
}

impl Default for Env {
    fn default() -> Self {
        Env::new()
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Env")
            .field("memoizing", &self.is_memoizing())
            .field("cache_entries", &self.cache_len())
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for EnvRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvRef")
            .field("live", &self.is_live())
            .finish()
    }
}
