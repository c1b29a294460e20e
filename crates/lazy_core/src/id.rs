//! Thunk identities.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Next identity to hand out. Zero is reserved for the empty sentinel.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a thunk, the key of the memoization cache.
///
/// Identities increase monotonically and are never reused, even across
/// environments, so a cache entry can never be confused with a later thunk.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ThunkId(u64);

impl ThunkId {
    /// Identity shared by every empty-list sentinel.
    pub const EMPTY: ThunkId = ThunkId(0);

    pub(crate) fn fresh() -> Self {
        ThunkId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ThunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
