//! Synchronization primitives for the search.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

/// The alpha bound shared by all root-parallel workers.
///
/// Wraps `Arc<AtomicI32>` so the raise loop lives in one place. Workers only
/// ever read it and raise it; it never goes down during a depth iteration.
#[derive(Clone, Debug)]
pub struct SharedAlpha(Arc<AtomicI32>);

impl SharedAlpha {
    /// New shared alpha starting at `initial`.
    #[must_use]
    pub fn new(initial: i32) -> SharedAlpha {
        SharedAlpha(Arc::new(AtomicI32::new(initial)))
    }

    /// Current value.
    #[inline]
    #[must_use]
    pub fn load(&self) -> i32 {
        self.0.load(Ordering::Relaxed)
    }

    /// Raise the bound to `score` if it is an improvement.
    ///
    /// Lock-free: the CAS loop retries at most once per concurrently
    /// competing raise, and gives up as soon as the current value is not
    /// below `score`.
    pub fn raise(&self, score: i32) {
        let mut current = self.load();
        while score > current {
            match self
                .0
                .compare_exchange_weak(current, score, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => break,
                Err(observed) => current = observed,
            }
        }
    }
}
