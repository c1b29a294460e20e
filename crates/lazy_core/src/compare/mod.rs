//! Structural equality of lazy lists.
//!
//! Two lists are equal when they have the same length and equal elements in
//! order. Elements that are themselves lists compare as lists through the
//! same impl, never by identity. Comparison forces both lists cell by cell,
//! so it only terminates when both are finite or they reach a shared cell.

use crate::thunk::Thunk;
use crate::Element;

impl<T: Element + PartialEq> PartialEq for Thunk<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.clone();
        let mut right = other.clone();
        loop {
            // Same identity from here on means the same remaining list.
            if left.id() == right.id() {
                return true;
            }
            match (left.force(), right.force()) {
                (None, None) => return true,
                (Some(a), Some(b)) => {
                    if !lazy_stack::ensure_sufficient_stack(|| a.head == b.head) {
                        return false;
                    }
                    left = a.tail.clone();
                    right = b.tail.clone();
                }
                _ => return false,
            }
        }
    }
}
