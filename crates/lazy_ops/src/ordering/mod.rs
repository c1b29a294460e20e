//! Greatest and least elements.

use std::cmp::Ordering;

use lazy_core::{Element, Thunk};

use crate::transform::reduce;

/// Outcome of searching a list for its greatest or least element.
#[derive(Clone, Debug, PartialEq)]
pub enum Extremum<T> {
    Found(T),
    /// The list has no elements.
    Empty,
    /// Two elements met that have no order between them, such as values of
    /// different kinds or a NaN.
    Incomparable,
}

impl<T> Extremum<T> {
    /// The element, if one was found.
    pub fn found(self) -> Option<T> {
        match self {
            Extremum::Found(item) => Some(item),
            Extremum::Empty | Extremum::Incomparable => None,
        }
    }

    pub fn is_incomparable(&self) -> bool {
        matches!(self, Extremum::Incomparable)
    }
}

pub(crate) fn max<T: Element + PartialOrd>(list: &Thunk<T>) -> Extremum<T> {
    extremum(list, Ordering::Greater)
}

pub(crate) fn min<T: Element + PartialOrd>(list: &Thunk<T>) -> Extremum<T> {
    extremum(list, Ordering::Less)
}

/// Left fold over the tail, seeded with the head, replacing the running best
/// only when a later element is strictly better. `wins` is how the best
/// compares to a loser.
fn extremum<T: Element + PartialOrd>(list: &Thunk<T>, wins: Ordering) -> Extremum<T> {
    let Some(cell) = list.force() else {
        return Extremum::Empty;
    };
    reduce(
        &cell.tail,
        |best, item| match best {
            Extremum::Found(current) => match current.partial_cmp(item) {
                Some(order) if order == wins || order == Ordering::Equal => {
                    Extremum::Found(current)
                }
                Some(_) => Extremum::Found(item.clone()),
                None => {
                    tracing::debug!("list elements have no order between them");
                    Extremum::Incomparable
                }
            },
            settled => settled,
        },
        Extremum::Found(cell.head.clone()),
    )
}
