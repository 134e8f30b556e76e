//! Trailing-edge debounce backed by a cancelable tokio task.
//!
//! Every call cancels the pending task (if any) and schedules a new one, so
//! only the last call within the quiet window runs.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::debug;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// An owned, cancelable scheduled action.
///
/// Clones share the same pending slot, so a clone handed to a callback
/// cancels the same timer as the original.
#[derive(Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl std::fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish()
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// The quiet window.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `f` to run after the quiet window, replacing any pending call.
    ///
    /// Outside a tokio runtime there is no timer to wait on, so `f` runs
    /// immediately.
    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let Ok(handle) = Handle::try_current() else {
            debug!("No runtime for debounced call, running now");
            self.cancel();
            f();
            return;
        };

        let Ok(mut pending) = self.pending.lock() else {
            return;
        };
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        let delay = self.delay;
        *pending = Some(handle.spawn(async move {
            tokio::time::sleep(delay).await;
            f();
        }));
    }

    /// Drop the pending call without running it.
    pub fn cancel(&self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(previous) = pending.take() {
                previous.abort();
            }
        }
    }

    /// Whether a scheduled call has not run yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .map(|p| p.as_ref().is_some_and(|h| !h.is_finished()))
            .unwrap_or(false)
    }
}
