//! Tick source abstraction.
//!
//! A [`TickScheduler`] installs a periodic tick source and hands back a
//! [`TickHandle`] naming it. Cancelling is idempotent. The engine keeps at
//! most one handle alive and rejects ticks from any other handle, so a tick
//! already queued by a cancelled source can never decrement the timer.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use std::time::Duration;

/// Period of the timer tick.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Identity of one installed tick source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TickHandle(u64);

impl TickHandle {
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

/// Installs and cancels periodic tick sources.
pub trait TickScheduler {
    /// Install a tick source firing every `period`.
    fn install(&mut self, period: Duration) -> TickHandle;

    /// Cancel the source behind `handle`. Cancelling twice, or cancelling a
    /// handle this scheduler never issued, does nothing.
    fn cancel(&mut self, handle: TickHandle);
}

#[derive(Debug, Default)]
struct TickLedger {
    next_id: u64,
    live: BTreeSet<TickHandle>,
    installs: usize,
    cancels: usize,
    peak_live: usize,
}

/// Scheduler that never fires on its own.
///
/// Ticks are delivered by calling the timer directly. Clones share one
/// ledger, so a test can keep a clone after handing the scheduler over.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    ledger: Rc<RefCell<TickLedger>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn installs(&self) -> usize {
        self.ledger.borrow().installs
    }

    pub fn cancels(&self) -> usize {
        self.ledger.borrow().cancels
    }

    pub fn live_count(&self) -> usize {
        self.ledger.borrow().live.len()
    }

    /// Highest number of simultaneously live sources ever observed.
    pub fn peak_live(&self) -> usize {
        self.ledger.borrow().peak_live
    }

    pub fn is_live(&self, handle: TickHandle) -> bool {
        self.ledger.borrow().live.contains(&handle)
    }
}

impl TickScheduler for ManualScheduler {
    fn install(&mut self, _period: Duration) -> TickHandle {
        let mut ledger = self.ledger.borrow_mut();
        let handle = TickHandle(ledger.next_id);
        ledger.next_id += 1;
        ledger.installs += 1;
        ledger.live.insert(handle);
        ledger.peak_live = ledger.peak_live.max(ledger.live.len());
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        let mut ledger = self.ledger.borrow_mut();
        if ledger.live.remove(&handle) {
            ledger.cancels += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_is_idempotent() {
        let mut scheduler = ManualScheduler::new();
        let observer = scheduler.clone();
        let handle = scheduler.install(TICK_PERIOD);
        assert!(observer.is_live(handle));

        scheduler.cancel(handle);
        scheduler.cancel(handle);
        scheduler.cancel(TickHandle::from_raw(99));

        assert_eq!(observer.installs(), 1);
        assert_eq!(observer.cancels(), 1);
        assert_eq!(observer.live_count(), 0);
    }

    #[test]
    fn handles_are_distinct() {
        let mut scheduler = ManualScheduler::new();
        let a = scheduler.install(TICK_PERIOD);
        scheduler.cancel(a);
        let b = scheduler.install(TICK_PERIOD);
        assert_ne!(a, b);
        assert_eq!(scheduler.peak_live(), 1);
    }
}
