//! Debounced value delivery.
//!
//! Each scheduled value restarts a quiet-period timer; only the value that
//! survives a full quiet period without being replaced is delivered.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Cancellable delayed delivery of the most recently scheduled value.
///
/// Delivery runs on a spawned tokio task, so `schedule` must be called from
/// within a runtime. Ready values are collected with [`Debouncer::take_ready`].
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    /// Bumped on every schedule and cancel; values tagged with an older
    /// generation are stale and dropped
    generation: u64,
    pending: bool,
    task: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<(u64, T)>,
    rx: mpsc::UnboundedReceiver<(u64, T)>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer with the given quiet period.
    pub fn new(quiet: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            quiet,
            generation: 0,
            pending: false,
            task: None,
            tx,
            rx,
        }
    }

    /// Schedule a value, replacing any value still waiting.
    ///
    /// # Arguments
    /// * `value` - Value to deliver after the quiet period
    pub fn schedule(&mut self, value: T) {
        self.abort_task();
        self.generation += 1;
        self.pending = true;

        let generation = self.generation;
        let quiet = self.quiet;
        let tx = self.tx.clone();
        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            // Receiver lives as long as the debouncer; a failed send means it was dropped
            let _ = tx.send((generation, value));
        }));
    }

    /// Drop the waiting value, if any.
    pub fn cancel(&mut self) {
        self.abort_task();
        self.generation += 1;
        self.pending = false;
    }

    /// Whether a scheduled value has not been taken or cancelled yet.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Collect the value whose quiet period has elapsed.
    ///
    /// # Returns
    /// * `Option<T>` - The current value, or None if nothing is ready
    ///
    /// # Details
    /// Drains the channel and discards values sent before the latest
    /// `schedule` or `cancel`.
    pub fn take_ready(&mut self) -> Option<T> {
        let mut ready = None;
        while let Ok((generation, value)) = self.rx.try_recv() {
            if generation == self.generation {
                ready = Some(value);
            }
        }

        if ready.is_some() {
            self.pending = false;
            self.task = None;
        }
        ready
    }

    fn abort_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
