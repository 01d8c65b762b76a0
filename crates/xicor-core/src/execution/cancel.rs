//! Cooperative cancellation for long batches

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared cancellation flag with an optional deadline
///
/// Work items poll [`is_cancelled`](Self::is_cancelled) before they start;
/// an item that is already running is allowed to finish. Clones share the
/// same flag, so one clone can be handed to another thread to stop a run.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancellationToken {
    /// Create a token that is never cancelled until [`cancel`](Self::cancel) is called
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel automatically once `deadline` has passed
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Cancel automatically once `timeout` has elapsed from now
    pub fn with_timeout(self, timeout: Duration) -> Self {
        let deadline = Instant::now() + timeout;
        self.with_deadline(deadline)
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested or the deadline has passed
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
            || self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// The configured deadline, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
