//! Errors surfaced by list operations.

/// Failure of an operation on a lazy list.
///
/// Among list operations only indexing fails loudly. Running out of elements
/// elsewhere is part of the normal result (`None`, an empty list, or
/// `Extremum::Empty`).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// `at(index)` on a list with only `len` elements.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The channel adapter could not start its worker thread.
    #[error("could not spawn iteration worker: {reason}")]
    WorkerSpawn { reason: String },
}
