//! # Progress publication
//!
//! The solver pushes a [`SolverResult`] snapshot to a registered
//! [`ProgressSink`] once per reporting interval. Publication is a one-way
//! notification: the solver never waits for the consumer, and a slow
//! consumer simply observes the most recent snapshot the next time it
//! looks (at-most-current-value semantics, not a queue).

use std::sync::{Arc, Mutex};

use crate::solver::SolverResult;

/// Consumer interface for periodic progress snapshots.
///
/// Implementations must not block: the solver calls `publish` from inside
/// the evolutionary loop.
pub trait ProgressSink: Send + Sync {
    /// Receives a complete, internally consistent snapshot of the best
    /// individual found so far.
    fn publish(&self, snapshot: &SolverResult);
}

/// A `ProgressSink` that keeps only the latest snapshot.
///
/// Clone the handle before starting the solve and poll
/// [`SharedProgress::latest`] from any thread; each published snapshot
/// overwrites the previous one.
///
/// # Examples
///
/// ```
/// use magicga::progress::SharedProgress;
///
/// let progress = SharedProgress::new();
/// assert!(progress.latest().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedProgress {
    latest: Arc<Mutex<Option<SolverResult>>>,
}

impl SharedProgress {
    /// Creates an empty progress slot.
    pub fn new() -> Self {
        Self {
            latest: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns a copy of the most recently published snapshot, if any.
    pub fn latest(&self) -> Option<SolverResult> {
        self.latest.lock().ok().and_then(|guard| guard.clone())
    }
}

impl ProgressSink for SharedProgress {
    fn publish(&self, snapshot: &SolverResult) {
        if let Ok(mut guard) = self.latest.lock() {
            *guard = Some(snapshot.clone());
        }
    }
}
