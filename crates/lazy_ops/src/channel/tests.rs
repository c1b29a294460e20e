use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::*;
use lazy_core::{list, Env};
use pretty_assertions::assert_eq;

#[test]
fn receives_every_element_in_order() -> Result<(), ListError> {
    let env = Env::new();
    let receiver = spawn_iter(&list![env; 1, 2, 3], 0)?;
    let received: Vec<i32> = receiver.iter().collect();
    assert_eq!(received, vec![1, 2, 3]);
    Ok(())
}

#[test]
fn empty_list_closes_immediately() -> Result<(), ListError> {
    let empty: Thunk<i32> = Thunk::empty();
    let receiver = spawn_iter(&empty, 4)?;
    assert!(receiver.recv().is_err());
    Ok(())
}

#[test]
fn buffered_channel_on_infinite_list() -> Result<(), ListError> {
    let env = Env::new();
    let naturals = env.updating(0_u64, |n| n + 1);
    let receiver = spawn_iter(&naturals, 16)?;
    let firsts: Vec<u64> = receiver.iter().take(5).collect();
    assert_eq!(firsts, vec![0, 1, 2, 3, 4]);
    Ok(())
}

#[test]
fn rendezvous_forces_one_cell_ahead_at_most() -> Result<(), ListError> {
    let env = Env::new();
    let forced = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&forced);
    let naturals = env.updating(0_u64, move |n| {
        counter.fetch_add(1, Ordering::SeqCst);
        n + 1
    });

    let receiver = spawn_iter(&naturals, 0)?;
    assert_eq!(receiver.recv_timeout(Duration::from_secs(5)).ok(), Some(0));
    assert_eq!(receiver.recv_timeout(Duration::from_secs(5)).ok(), Some(1));
    drop(receiver);

    // The worker is blocked on its third send or has just failed it.
    assert!(forced.load(Ordering::SeqCst) <= 3);
    Ok(())
}
