//! Identity-keyed memoization table.

use std::any::Any;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::id::ThunkId;
use crate::thunk::Forced;
use crate::Element;

/// Entries are type-erased because one environment serves lists of every
/// element type. Each identity is only ever stored with one `Forced<T>`.
type Slot = Box<dyn Any + Send + Sync>;

/// Snapshot of cache activity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

pub(crate) struct MemoCache {
    enabled: AtomicBool,
    entries: Mutex<FxHashMap<ThunkId, Slot>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoCache {
    pub(crate) fn new(enabled: bool) -> Self {
        MemoCache {
            enabled: AtomicBool::new(enabled),
            entries: Mutex::new(FxHashMap::default()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    #[inline]
    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Flip the flag; entries are kept either way.
    pub(crate) fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub(crate) fn lookup<T: Element>(&self, id: ThunkId) -> Option<Forced<T>> {
        let hit = self
            .entries
            .lock()
            .get(&id)
            .and_then(|slot| slot.downcast_ref::<Forced<T>>())
            .cloned();
        if hit.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(%id, "memo hit");
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(%id, "memo miss");
        }
        hit
    }

    /// Record the result for `id` and return the stored value.
    ///
    /// If a re-entrant evaluation already stored a result for this identity,
    /// that earlier result wins so every caller sees the same pair.
    pub(crate) fn store<T: Element>(&self, id: ThunkId, forced: Forced<T>) -> Forced<T> {
        let mut entries = self.entries.lock();
        if let Some(existing) = entries
            .get(&id)
            .and_then(|slot| slot.downcast_ref::<Forced<T>>())
        {
            return existing.clone();
        }
        let slot: Slot = Box::new(forced.clone());
        entries.insert(id, slot);
        forced
    }

    /// Drop every entry, returning how many there were.
    pub(crate) fn clear(&self) -> usize {
        let dropped = std::mem::take(&mut *self.entries.lock());
        // Released outside the lock: dropping cells drops closures that may
        // hold other environments.
        let count = dropped.len();
        drop(dropped);
        count
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub(crate) fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}
