//! Pull-based iteration over a lazy list.

use std::iter::FusedIterator;

use crate::thunk::Thunk;
use crate::Element;

/// Iterator that forces one cell per call to `next`.
///
/// Holds only the current cursor, so elements already yielded can be
/// reclaimed while iterating (unless the cache still holds them).
pub struct ListIter<T: Element> {
    cursor: Thunk<T>,
}

impl<T: Element> ListIter<T> {
    pub(crate) fn new(cursor: Thunk<T>) -> Self {
        ListIter { cursor }
    }

    /// The part of the list not yet yielded.
    pub fn rest(&self) -> &Thunk<T> {
        &self.cursor
    }
}

impl<T: Element> Iterator for ListIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let Some(cell) = self.cursor.force() else {
            self.cursor = Thunk::empty();
            return None;
        };
        self.cursor = cell.tail.clone();
        Some(cell.head.clone())
    }
}

impl<T: Element> FusedIterator for ListIter<T> {}
