//! Terminal implementations of the timer's display, notification and prompt
//! sinks.

use std::io::Write;

use zenfocus_core::{
    CompletionPrompt, DisplayFrame, DisplaySink, Mode, NotificationError, NotificationSink,
    NotificationsConfig,
};

const BAR_WIDTH: usize = 30;

fn progress_bar(progress: f64) -> String {
    let filled = (progress.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Redraws one status line, or prints one JSON frame per line.
pub struct TerminalDisplay {
    json: bool,
}

impl TerminalDisplay {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

impl DisplaySink for TerminalDisplay {
    fn render(&mut self, frame: &DisplayFrame) {
        let mut out = std::io::stdout().lock();
        let written = if self.json {
            match serde_json::to_string(frame) {
                Ok(line) => writeln!(out, "{line}"),
                Err(e) => {
                    tracing::warn!(error = %e, "could not encode display frame");
                    return;
                }
            }
        } else {
            let status = if frame.is_running { "running" } else { "paused" };
            write!(
                out,
                "\r{:<12} {} [{}] {:<7}",
                frame.mode.label(),
                frame.text(),
                progress_bar(frame.progress),
                status
            )
        };
        if let Err(e) = written.and_then(|()| out.flush()) {
            tracing::debug!(error = %e, "display write failed");
        }
    }
}

/// Rings the terminal bell.
pub struct BellNotifier {
    enabled: bool,
}

impl BellNotifier {
    pub fn new(config: &NotificationsConfig) -> Self {
        Self {
            enabled: config.enabled && config.bell,
        }
    }
}

impl NotificationSink for BellNotifier {
    fn notify(&mut self, _mode: Mode) -> Result<(), NotificationError> {
        if !self.enabled {
            return Ok(());
        }
        let mut out = std::io::stdout().lock();
        out.write_all(b"\x07")
            .and_then(|()| out.flush())
            .map_err(|e| NotificationError::Failed(e.to_string()))
    }
}

/// Prints the completion message.
///
/// Does not wait for input: stdin belongs to the command reader, so the
/// acknowledgment is the next command the user types.
pub struct TerminalPrompt {
    enabled: bool,
    message: String,
}

impl TerminalPrompt {
    pub fn new(config: &NotificationsConfig) -> Self {
        Self {
            enabled: config.enabled,
            message: config.message.clone(),
        }
    }
}

impl CompletionPrompt for TerminalPrompt {
    fn acknowledge(&mut self, mode: Mode) {
        if self.enabled {
            eprintln!("\n{} ({mode})", self.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_with_progress() {
        assert_eq!(progress_bar(1.0), "#".repeat(BAR_WIDTH));
        assert_eq!(progress_bar(0.0), "-".repeat(BAR_WIDTH));
        assert_eq!(progress_bar(0.5).matches('#').count(), BAR_WIDTH / 2);
        assert_eq!(progress_bar(7.0).len(), BAR_WIDTH);
    }
}
