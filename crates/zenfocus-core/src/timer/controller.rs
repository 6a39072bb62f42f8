//! The single timer controller.
//!
//! [`FocusTimer`] owns the [`DurationRegistry`] and the [`TimerEngine`],
//! runs the completion effect, and pushes a [`DisplayFrame`] to the display
//! sink after every state change.
//!
//! ## Usage
//!
//! ```ignore
//! let (scheduler, mut ticks) = IntervalScheduler::new();
//! let mut timer = FocusTimer::new(registry, Box::new(scheduler), notifier, prompt, display);
//! timer.start();
//! while let Some(handle) = ticks.recv().await {
//!     timer.handle_tick(handle);
//! }
//! ```

use chrono::Utc;

use super::engine::{TimerEngine, TimerState};
use super::mode::Mode;
use super::progress::format_clock;
use super::registry::{DurationRegistry, Persistence};
use super::tick::{TickHandle, TickScheduler};
use crate::error::SettingsError;
use crate::events::Event;
use crate::sinks::{CompletionPrompt, DisplayFrame, DisplaySink, NotificationSink};

pub struct FocusTimer {
    registry: DurationRegistry,
    engine: TimerEngine,
    notifier: Box<dyn NotificationSink>,
    prompt: Box<dyn CompletionPrompt>,
    display: Box<dyn DisplaySink>,
}

impl FocusTimer {
    /// Wire up a timer and render its initial frame.
    pub fn new(
        registry: DurationRegistry,
        scheduler: Box<dyn TickScheduler>,
        notifier: Box<dyn NotificationSink>,
        prompt: Box<dyn CompletionPrompt>,
        display: Box<dyn DisplaySink>,
    ) -> Self {
        let engine = TimerEngine::new(&registry, scheduler);
        let mut timer = Self {
            registry,
            engine,
            notifier,
            prompt,
            display,
        };
        timer.publish();
        timer
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.engine.state()
    }

    pub fn registry(&self) -> &DurationRegistry {
        &self.registry
    }

    pub fn active_tick(&self) -> Option<TickHandle> {
        self.engine.active_tick()
    }

    pub fn progress(&self) -> f64 {
        self.engine.progress(&self.registry)
    }

    pub fn frame(&self) -> DisplayFrame {
        let state = self.engine.state();
        let (minutes, seconds) = format_clock(state.remaining_secs);
        DisplayFrame {
            minutes,
            seconds,
            progress: self.progress(),
            mode: state.mode,
            is_running: state.is_running,
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        let state = self.engine.state();
        Event::StateSnapshot {
            mode: state.mode,
            is_running: state.is_running,
            remaining_secs: state.remaining_secs,
            total_secs: self.registry.get(state.mode),
            progress: self.progress(),
            display: self.frame().text(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        let event = self.engine.start();
        self.publish_if(event)
    }

    pub fn pause(&mut self) -> Option<Event> {
        let event = self.engine.pause();
        self.publish_if(event)
    }

    pub fn toggle(&mut self) -> Option<Event> {
        let event = self.engine.toggle();
        self.publish_if(event)
    }

    pub fn reset(&mut self) -> Event {
        let event = self.engine.reset(&self.registry);
        self.publish();
        event
    }

    pub fn switch_mode(&mut self, mode: Mode) -> Event {
        let event = self.engine.switch_mode(mode, &self.registry);
        self.publish();
        event
    }

    /// Advance one second.
    ///
    /// On reaching zero this announces completion, waits for the prompt to
    /// return, and resets to the full duration before returning
    /// `Some(Event::TimerCompleted)`.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.engine.is_running() {
            return None;
        }
        let completed = self.engine.tick(&self.registry);
        if let Some(Event::TimerCompleted { mode, .. }) = &completed {
            self.complete(*mode);
        }
        self.publish();
        completed
    }

    /// Advance one second if `handle` names the live tick source.
    ///
    /// Ticks from a cancelled source are dropped.
    pub fn handle_tick(&mut self, handle: TickHandle) -> Option<Event> {
        if self.engine.active_tick() != Some(handle) {
            tracing::trace!(handle = handle.id(), "dropping stale tick");
            return None;
        }
        self.tick()
    }

    /// Replace all durations (whole minutes).
    ///
    /// When idle, the current mode is refilled with its new duration.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidDuration`] if any value is below one
    /// minute; nothing changes in that case.
    pub fn update_settings(
        &mut self,
        focus: u32,
        short: u32,
        long: u32,
    ) -> Result<Event, SettingsError> {
        let persistence = self.registry.set_all(focus, short, long, &mut self.engine)?;
        self.publish();
        Ok(Event::SettingsUpdated {
            focus_min: focus,
            short_min: short,
            long_min: long,
            persisted: persistence == Persistence::Saved,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn complete(&mut self, mode: Mode) {
        tracing::info!(%mode, "timer completed");
        if let Err(e) = self.notifier.notify(mode) {
            tracing::warn!(error = %e, "completion notification failed");
        }
        self.prompt.acknowledge(mode);
        self.engine.reset(&self.registry);
    }

    fn publish(&mut self) {
        let frame = self.frame();
        self.display.render(&frame);
    }

    fn publish_if(&mut self, event: Option<Event>) -> Option<Event> {
        if event.is_some() {
            self.publish();
        }
        event
    }
}
