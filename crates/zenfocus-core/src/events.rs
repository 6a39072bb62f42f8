use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Mode;

/// Every timer state change produces an Event.
/// The terminal host prints them; tests assert on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// The countdown reached zero. [`TimerEngine::tick`] returns this with the
    /// engine idle at 0; [`FocusTimer::tick`] runs the completion effect and
    /// resets to the full duration of `mode` before returning it.
    ///
    /// [`TimerEngine::tick`]: crate::timer::TimerEngine::tick
    /// [`FocusTimer::tick`]: crate::timer::FocusTimer::tick
    TimerCompleted {
        mode: Mode,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: Mode,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    ModeSwitched {
        from: Mode,
        to: Mode,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    SettingsUpdated {
        focus_min: u32,
        short_min: u32,
        long_min: u32,
        /// False when the store rejected the write.
        persisted: bool,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: Mode,
        is_running: bool,
        remaining_secs: u64,
        total_secs: u64,
        progress: f64,
        display: String,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Event::TimerStarted { at, .. }
            | Event::TimerPaused { at, .. }
            | Event::TimerCompleted { at, .. }
            | Event::TimerReset { at, .. }
            | Event::ModeSwitched { at, .. }
            | Event::SettingsUpdated { at, .. }
            | Event::StateSnapshot { at, .. } => *at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let event = Event::TimerReset {
            mode: Mode::LongBreak,
            duration_secs: 900,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "TimerReset");
        assert_eq!(json["mode"], "long");
        assert_eq!(json["duration_secs"], 900);
    }
}
