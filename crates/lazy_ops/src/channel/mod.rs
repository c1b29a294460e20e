//! Push-style iteration: a worker thread walks a list and sends its elements
//! through a channel.
//!
//! The consumer pulls with any `Receiver` method, typically
//! `for item in receiver { ... }`. Dropping the receiver stops the worker at
//! its next send, so infinite lists are fine.

use std::thread;

use crossbeam::channel::{bounded, Receiver};
use lazy_core::{Element, ListError, Thunk};

/// Walk `list` on a new thread, sending each element through a channel of
/// the given `capacity`.
///
/// A capacity of zero hands elements over one at a time: the worker forces
/// the next cell only after the previous element was received.
pub fn spawn_iter<T: Element>(list: &Thunk<T>, capacity: usize) -> Result<Receiver<T>, ListError> {
    let (sender, receiver) = bounded(capacity);
    let source = list.clone();

    thread::Builder::new()
        .name("lazy-list-iter".to_string())
        .spawn(move || {
            tracing::debug!(list = %source.id(), "iteration worker started");
            let mut sent = 0_usize;
            for item in &source {
                if sender.send(item).is_err() {
                    tracing::debug!(sent, "receiver dropped, iteration worker stopping");
                    return;
                }
                sent += 1;
            }
            tracing::debug!(sent, "iteration worker reached end of list");
        })
        .map_err(|err| ListError::WorkerSpawn {
            reason: err.to_string(),
        })?;

    Ok(receiver)
}

#[cfg(test)]
mod tests;
