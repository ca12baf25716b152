//! Cooperative search cancellation

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Shared cancel flag checked between root-move evaluations.
///
/// Clone the control to keep a handle outside the engine; cancelling makes
/// the in-flight search return no move, and nothing is applied to the live
/// game. The engine rearms the flag when the next search starts.
#[derive(Debug, Clone, Default)]
pub struct SearchControl {
    cancelled: Arc<AtomicBool>,
}

impl SearchControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the in-flight search to stop at the next root boundary.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Rearm for a fresh search.
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::SeqCst);
    }
}
