//! Core error types for zenfocus-core.
//!
//! Every error here is recoverable: settings errors reject the input and leave
//! the registry untouched, storage errors degrade to in-memory operation, and
//! notification errors are swallowed at the controller boundary.

use std::path::PathBuf;
use thiserror::Error;

use crate::timer::Mode;

/// Core error type for zenfocus-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings input rejected
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Persistence adapter errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Duration settings errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// A duration below the one-minute minimum
    #[error("Invalid duration for {mode}: {minutes} minute(s), minimum is 1")]
    InvalidDuration { mode: Mode, minutes: u32 },
}

/// Persistence adapter errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing store could not be read or written
    #[error("Persistence unavailable: {0}")]
    Unavailable(String),

    /// A stored value under `key` could not be decoded
    #[error("Corrupt value under '{key}': {message}")]
    Corrupt { key: String, message: String },
}

/// Notification sink errors.
#[derive(Error, Debug)]
pub enum NotificationError {
    /// The sink could not deliver the notification
    #[error("Notification failed: {0}")]
    Failed(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::Unavailable(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_minutes(raw: &str) -> Result<u32> {
        let minutes: u32 = serde_json::from_str(raw)?;
        if minutes == 0 {
            return Err(SettingsError::InvalidDuration {
                mode: Mode::Focus,
                minutes,
            }
            .into());
        }
        Ok(minutes)
    }

    #[test]
    fn question_mark_lifts_into_core_error() {
        assert_eq!(parse_minutes("25").unwrap(), 25);
        assert!(matches!(parse_minutes("\"x\""), Err(CoreError::Json(_))));

        let err = parse_minutes("0").unwrap_err();
        assert!(matches!(err, CoreError::Settings(_)));
        assert!(err.to_string().contains("Invalid duration for Focus"));
    }

    #[test]
    fn io_and_custom_messages() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(CoreError::from(io).to_string(), "IO error: gone");
        let custom = CoreError::Custom("no task with id 3".into());
        assert_eq!(custom.to_string(), "no task with id 3");
    }
}
