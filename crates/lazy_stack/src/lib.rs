//! Stack growth guard for the force engine.
//!
//! Forcing a thunk may force other thunks before it returns: a `map_n` cell
//! forces one cell of every input, a self-referential stream forces its own
//! earlier cells, and comparing nested lists recurses once per nesting level.
//! None of these depths are bounded by the list type, so every such entry
//! point goes through [`ensure_sufficient_stack`].
//!
//! On native targets the stack is grown on demand with `stacker`. On WASM the
//! closure is called directly.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone is left.
///
/// ```text
/// fn evaluate(&self) -> Forced<T> {
///     ensure_sufficient_stack(|| match &self.body {
///         // ... may force other thunks ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
