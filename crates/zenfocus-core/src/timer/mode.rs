use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three timer modes. Serialized with the short names used in storage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    #[serde(rename = "focus")]
    Focus,
    #[serde(rename = "short")]
    ShortBreak,
    #[serde(rename = "long")]
    LongBreak,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Focus, Mode::ShortBreak, Mode::LongBreak];

    /// Built-in duration in seconds, used when nothing has been configured.
    pub fn default_secs(self) -> u64 {
        match self {
            Mode::Focus => 25 * 60,
            Mode::ShortBreak => 5 * 60,
            Mode::LongBreak => 15 * 60,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Mode::Focus => "focus",
            Mode::ShortBreak => "short",
            Mode::LongBreak => "long",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Focus => "Focus",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "focus" => Ok(Mode::Focus),
            "short" | "short-break" | "short_break" => Ok(Mode::ShortBreak),
            "long" | "long-break" | "long_break" => Ok(Mode::LongBreak),
            other => Err(format!("unknown mode: {other}")),
        }
    }
}
