mod controller;
mod engine;
mod interval;
mod mode;
mod progress;
mod registry;
mod tick;

pub use controller::FocusTimer;
pub use engine::{TimerEngine, TimerState};
pub use interval::IntervalScheduler;
pub use mode::Mode;
pub use progress::{clock_text, format_clock, progress};
pub use registry::{DurationObserver, DurationRegistry, Persistence};
pub use tick::{ManualScheduler, TickHandle, TickScheduler, TICK_PERIOD};
