//! # ZenFocus Core Library
//!
//! This library provides the core logic for the ZenFocus productivity widget:
//! a single countdown focus timer whose durations are persisted settings, plus
//! the small persisted collections (tasks, notes) that live next to it.
//!
//! ## Architecture
//!
//! - **Timer Engine**: A tick-driven state machine. It never sleeps or spawns
//!   on its own; a [`TickScheduler`] installs the periodic tick source and the
//!   caller feeds ticks back through [`FocusTimer::handle_tick`].
//! - **Duration Registry**: Per-mode durations, validated at configuration
//!   time and pushed to the engine through a [`DurationObserver`].
//! - **Storage**: A key-value persistence adapter (SQLite or in-memory) and
//!   TOML-based configuration.
//!
//! ## Key Components
//!
//! - [`FocusTimer`]: Controller owning the registry, engine and sinks
//! - [`TimerEngine`]: Core timer state machine
//! - [`DurationRegistry`]: Configured duration for each [`Mode`]
//! - [`Database`]: Persistent key-value store
//! - [`Config`]: Application configuration management

pub mod clock;
pub mod error;
pub mod events;
pub mod notes;
pub mod settings;
pub mod sinks;
pub mod storage;
pub mod tasks;
pub mod timer;

pub use error::{ConfigError, CoreError, NotificationError, SettingsError, StorageError};
pub use events::Event;
pub use settings::DurationSettings;
pub use sinks::{CompletionPrompt, DisplayFrame, DisplaySink, NotificationSink};
pub use storage::{Config, Database, KeyValueStore, MemoryStore, NotificationsConfig};
pub use tasks::{Task, TaskList};
pub use timer::{
    DurationObserver, DurationRegistry, FocusTimer, IntervalScheduler, ManualScheduler, Mode,
    TickHandle, TickScheduler, TimerEngine, TimerState,
};
