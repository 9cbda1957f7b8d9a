//! Supersedable background fetches.
//!
//! Each screen owns one `TaskSlot`. Starting a new fetch aborts the one in
//! flight and bumps the slot's generation; a task may only write state while
//! its `Ticket` is still current, and must check that under the same lock it
//! writes with. The result is "last submitted wins" regardless of the order
//! responses arrive in.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::{AbortHandle, JoinHandle};

/// How a fetch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The task ran to the end and wrote its result.
    Applied,
    /// A newer trigger replaced this task; nothing was written.
    Superseded,
}

/// Proof that a task belongs to a given trigger.
#[derive(Debug, Clone)]
pub struct Ticket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl Ticket {
    /// Whether no newer trigger has started since this one.
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }
}

/// Handle to await a spawned fetch.
#[derive(Debug)]
pub struct TaskHandle {
    inner: JoinHandle<TaskOutcome>,
}

impl TaskHandle {
    /// Wait for the task to finish. Aborted tasks report `Superseded`.
    pub async fn wait(self) -> TaskOutcome {
        match self.inner.await {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => TaskOutcome::Superseded,
            Err(e) => std::panic::resume_unwind(e.into_panic()),
        }
    }
}

/// One in-flight fetch per screen.
#[derive(Debug, Default)]
pub struct TaskSlot {
    current: Arc<AtomicU64>,
    running: Mutex<Option<AbortHandle>>,
}

impl TaskSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new trigger: invalidate and abort whatever is running.
    pub fn begin(&self) -> Ticket {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(prev) = self.running().take() {
            prev.abort();
        }
        Ticket {
            generation,
            current: Arc::clone(&self.current),
        }
    }

    /// Spawn the fetch for `ticket` on the tokio runtime.
    ///
    /// Must be called from within a runtime.
    pub fn spawn<F>(&self, ticket: &Ticket, fut: F) -> TaskHandle
    where
        F: Future<Output = TaskOutcome> + Send + 'static,
    {
        let inner = tokio::spawn(fut);
        let mut running = self.running();
        if ticket.is_current() {
            if let Some(prev) = running.replace(inner.abort_handle()) {
                prev.abort();
            }
        } else {
            inner.abort();
        }
        TaskHandle { inner }
    }

    /// Current generation. Zero means nothing was ever started.
    pub fn generation(&self) -> u64 {
        self.current.load(Ordering::SeqCst)
    }

    fn running(&self) -> MutexGuard<'_, Option<AbortHandle>> {
        self.running.lock().unwrap_or_else(|e| e.into_inner())
    }
}
