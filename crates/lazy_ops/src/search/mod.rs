//! Eager queries that walk a list from the front.

use lazy_core::{Element, ListError, Thunk};

use crate::slice::take_prefix;
use crate::transform::reverse;

pub(crate) fn any<T, F>(list: &Thunk<T>, mut pred: F) -> bool
where
    T: Element,
    F: FnMut(&T) -> bool,
{
    let mut cursor = list.clone();
    while let Some(cell) = cursor.force() {
        if pred(&cell.head) {
            return true;
        }
        cursor = cell.tail.clone();
    }
    false
}

pub(crate) fn all<T, F>(list: &Thunk<T>, mut pred: F) -> bool
where
    T: Element,
    F: FnMut(&T) -> bool,
{
    !any(list, |item| !pred(item))
}

pub(crate) fn at<T: Element>(list: &Thunk<T>, index: usize) -> Result<T, ListError> {
    let mut cursor = list.clone();
    let mut len = 0;
    while let Some(cell) = cursor.force() {
        if len == index {
            return Ok(cell.head.clone());
        }
        len += 1;
        cursor = cell.tail.clone();
    }
    Err(ListError::IndexOutOfRange { index, len })
}

pub(crate) fn last<T: Element>(list: &Thunk<T>) -> Option<T> {
    take_prefix(&reverse(list), 1).head()
}

#[cfg(test)]
mod tests;
