//! tokio-backed tick source.
//!
//! Each installed source is a task driving `tokio::time::interval_at`, first
//! firing one period after install. Ticks arrive on the receiver returned by
//! [`IntervalScheduler::new`] tagged with their handle; pass them to
//! [`FocusTimer::handle_tick`](super::FocusTimer::handle_tick).

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use super::tick::{TickHandle, TickScheduler};

pub struct IntervalScheduler {
    sender: mpsc::UnboundedSender<TickHandle>,
    tasks: HashMap<TickHandle, JoinHandle<()>>,
    next_id: u64,
}

impl IntervalScheduler {
    /// Create the scheduler and the receiving end of its tick channel.
    ///
    /// Installing a source spawns onto the current tokio runtime, so
    /// [`TickScheduler::install`] must be called from within one.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TickHandle>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let scheduler = Self {
            sender,
            tasks: HashMap::new(),
            next_id: 0,
        };
        (scheduler, receiver)
    }

    pub fn live_count(&self) -> usize {
        self.tasks.len()
    }
}

impl TickScheduler for IntervalScheduler {
    fn install(&mut self, period: Duration) -> TickHandle {
        let handle = TickHandle::from_raw(self.next_id);
        self.next_id += 1;

        let sender = self.sender.clone();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if sender.send(handle).is_err() {
                    break;
                }
            }
        });
        tracing::debug!(handle = handle.id(), "tick source installed");
        self.tasks.insert(handle, task);
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        if let Some(task) = self.tasks.remove(&handle) {
            task.abort();
            tracing::debug!(handle = handle.id(), "tick source cancelled");
        }
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
