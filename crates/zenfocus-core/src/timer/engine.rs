//! Timer engine implementation.
//!
//! The engine is a tick-driven state machine over a single countdown. It
//! never sleeps or spawns; it asks its [`TickScheduler`] for a tick source on
//! `start` and cancels it on every way out of running.
//!
//! ## State Transitions
//!
//! ```text
//! Idle(m, r>0) --start--> Running(m, r) --tick--> Running(m, r-1)
//! Running(m, r) --pause--> Idle(m, r)
//! Running(m, 1) --tick--> Idle(m, 0)   (caller completes and resets)
//! any --reset--> Idle(m, duration(m))
//! any --switch_mode(n)--> Idle(n, duration(n))
//! ```
//!
//! Durations are read from the [`DurationRegistry`] passed to each
//! transition that needs one; the engine keeps no copy of them.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::mode::Mode;
use super::progress::progress;
use super::registry::{DurationObserver, DurationRegistry};
use super::tick::{TickHandle, TickScheduler, TICK_PERIOD};
use crate::events::Event;

/// Live timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub mode: Mode,
    pub remaining_secs: u64,
    pub is_running: bool,
}

/// Core timer engine.
///
/// `is_running` is true exactly when a tick handle is held.
pub struct TimerEngine {
    state: TimerState,
    scheduler: Box<dyn TickScheduler>,
    tick: Option<TickHandle>,
}

impl TimerEngine {
    /// Create an idle engine in Focus mode with its full duration.
    pub fn new(registry: &DurationRegistry, scheduler: Box<dyn TickScheduler>) -> Self {
        Self {
            state: TimerState {
                mode: Mode::Focus,
                remaining_secs: registry.get(Mode::Focus),
                is_running: false,
            },
            scheduler,
            tick: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn remaining_secs(&self) -> u64 {
        self.state.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    /// Handle of the live tick source, if running.
    pub fn active_tick(&self) -> Option<TickHandle> {
        self.tick
    }

    /// 1.0 .. 0.0 fraction of the current mode still remaining.
    pub fn progress(&self, registry: &DurationRegistry) -> f64 {
        progress(self.state.remaining_secs, registry.get(self.state.mode))
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start counting down. Refused while running or with nothing left.
    pub fn start(&mut self) -> Option<Event> {
        if self.state.is_running {
            return None;
        }
        if self.state.remaining_secs == 0 {
            tracing::debug!(mode = %self.state.mode, "start refused, nothing remaining");
            return None;
        }
        self.cancel_tick();
        self.tick = Some(self.scheduler.install(TICK_PERIOD));
        self.state.is_running = true;
        tracing::debug!(
            mode = %self.state.mode,
            remaining = self.state.remaining_secs,
            "timer started"
        );
        Some(Event::TimerStarted {
            mode: self.state.mode,
            remaining_secs: self.state.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Stop counting down, keeping the remaining time. No-op while idle.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.state.is_running {
            return None;
        }
        self.stop();
        tracing::debug!(
            mode = %self.state.mode,
            remaining = self.state.remaining_secs,
            "timer paused"
        );
        Some(Event::TimerPaused {
            mode: self.state.mode,
            remaining_secs: self.state.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn toggle(&mut self) -> Option<Event> {
        if self.state.is_running {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Stop and refill the current mode.
    pub fn reset(&mut self, registry: &DurationRegistry) -> Event {
        self.stop();
        self.state.remaining_secs = registry.get(self.state.mode);
        Event::TimerReset {
            mode: self.state.mode,
            duration_secs: self.state.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Stop and switch to `mode` with its full duration.
    pub fn switch_mode(&mut self, mode: Mode, registry: &DurationRegistry) -> Event {
        let from = self.state.mode;
        self.stop();
        self.state.mode = mode;
        self.state.remaining_secs = registry.get(mode);
        tracing::debug!(%from, to = %mode, "mode switched");
        Event::ModeSwitched {
            from,
            to: mode,
            duration_secs: self.state.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Advance one second. Returns `Some(Event::TimerCompleted)` when the
    /// countdown reaches zero; the engine is then idle at zero and the caller
    /// is expected to run the completion effect and reset.
    ///
    /// A tick while idle does nothing.
    pub fn tick(&mut self, registry: &DurationRegistry) -> Option<Event> {
        if !self.state.is_running {
            return None;
        }
        if self.state.remaining_secs > 1 {
            self.state.remaining_secs -= 1;
            return None;
        }
        self.stop();
        self.state.remaining_secs = 0;
        Some(Event::TimerCompleted {
            mode: self.state.mode,
            duration_secs: registry.get(self.state.mode),
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn stop(&mut self) {
        self.cancel_tick();
        self.state.is_running = false;
    }

    fn cancel_tick(&mut self) {
        if let Some(handle) = self.tick.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl DurationObserver for TimerEngine {
    /// Refill the current mode from the new durations when idle. A running
    /// countdown keeps its remaining time, capped at the new duration.
    fn durations_changed(&mut self, registry: &DurationRegistry) {
        let total = registry.get(self.state.mode);
        if self.state.is_running {
            self.state.remaining_secs = self.state.remaining_secs.min(total);
        } else {
            self.state.remaining_secs = total;
        }
    }
}

impl Drop for TimerEngine {
    fn drop(&mut self) {
        self.cancel_tick();
    }
}
