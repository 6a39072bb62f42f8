mod config;
pub mod database;
mod memory;

pub use config::{Config, LoggingConfig, NotificationsConfig, StorageConfig};
pub use database::Database;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::error::{ConfigError, StorageError};

/// Persistence adapter: a key-value store of opaque JSON blobs.
///
/// Mirrors the browser-local storage the widget was built on. Callers treat a
/// failing store as "no value" on load and as best-effort on save.
pub trait KeyValueStore {
    /// Load the value stored under `key`, if any.
    ///
    /// # Errors
    /// Returns [`StorageError::Unavailable`] if the backing store cannot be
    /// read, or [`StorageError::Corrupt`] if the stored text is not JSON.
    fn load(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns [`StorageError::Unavailable`] if the write fails.
    fn save(&self, key: &str, value: &serde_json::Value) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn load(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &serde_json::Value) -> Result<(), StorageError> {
        (**self).save(key, value)
    }
}

/// Returns the data directory, creating it if needed.
///
/// `ZENFOCUS_DATA_DIR` overrides the location outright. Otherwise this is
/// `~/.config/zenfocus/`, or `~/.config/zenfocus-dev/` when `ZENFOCUS_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("ZENFOCUS_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("ZENFOCUS_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("zenfocus-dev")
            } else {
                base_dir.join("zenfocus")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}

/// Open the store selected by `config`.
///
/// Falls back to an in-memory store for the session when the database cannot
/// be opened.
pub fn open_store(config: &Config) -> Box<dyn KeyValueStore> {
    if config.storage.in_memory {
        tracing::debug!("using in-memory store by configuration");
        return Box::new(MemoryStore::new());
    }
    match Database::open() {
        Ok(db) => Box::new(db),
        Err(e) => {
            tracing::warn!(error = %e, "persistence unavailable, continuing in memory");
            Box::new(MemoryStore::new())
        }
    }
}
