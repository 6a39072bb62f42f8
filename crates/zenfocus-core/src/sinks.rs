//! Collaborators the timer drives but does not own: where completion is
//! announced and where the countdown is shown.

use serde::{Deserialize, Serialize};

use crate::error::NotificationError;
use crate::timer::Mode;

/// Announces a finished countdown (sound, desktop notification, bell).
pub trait NotificationSink {
    /// Best-effort. Errors are logged by the caller and otherwise ignored.
    fn notify(&mut self, mode: Mode) -> Result<(), NotificationError>;
}

/// Asks the user to acknowledge a finished countdown.
///
/// May block; the timer resets once it returns.
pub trait CompletionPrompt {
    fn acknowledge(&mut self, mode: Mode);
}

/// What a renderer needs to draw the timer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayFrame {
    /// Zero-padded minutes.
    pub minutes: String,
    /// Zero-padded seconds.
    pub seconds: String,
    /// Remaining fraction, `0.0..=1.0`.
    pub progress: f64,
    pub mode: Mode,
    pub is_running: bool,
}

impl DisplayFrame {
    pub fn text(&self) -> String {
        format!("{}:{}", self.minutes, self.seconds)
    }
}

/// Receives a frame after every timer state change.
pub trait DisplaySink {
    fn render(&mut self, frame: &DisplayFrame);
}

/// Sink that drops everything. Useful where no one is watching, such as a
/// one-shot settings update.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl NotificationSink for Silent {
    fn notify(&mut self, _mode: Mode) -> Result<(), NotificationError> {
        Ok(())
    }
}

impl CompletionPrompt for Silent {
    fn acknowledge(&mut self, _mode: Mode) {}
}

impl DisplaySink for Silent {
    fn render(&mut self, _frame: &DisplayFrame) {}
}
