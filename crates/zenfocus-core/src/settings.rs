//! Persisted duration settings.
//!
//! Stored under [`SETTINGS_KEY`] as `{"focus": 25, "short": 5, "long": 15}`,
//! whole minutes, no schema version.

use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, StorageError};
use crate::storage::KeyValueStore;
use crate::timer::Mode;

pub const SETTINGS_KEY: &str = "zenfocus_settings";

/// Minimum accepted duration for any mode, in minutes.
pub const MIN_MINUTES: u32 = 1;

/// Duration for each mode in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationSettings {
    pub focus: u32,
    pub short: u32,
    pub long: u32,
}

impl Default for DurationSettings {
    fn default() -> Self {
        Self {
            focus: 25,
            short: 5,
            long: 15,
        }
    }
}

impl DurationSettings {
    pub fn new(focus: u32, short: u32, long: u32) -> Self {
        Self { focus, short, long }
    }

    pub fn minutes(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Focus => self.focus,
            Mode::ShortBreak => self.short,
            Mode::LongBreak => self.long,
        }
    }

    pub fn secs(&self, mode: Mode) -> u64 {
        u64::from(self.minutes(mode)) * 60
    }

    /// Reject any mode shorter than one minute, reporting the first offender.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidDuration`].
    pub fn validate(&self) -> Result<(), SettingsError> {
        for mode in Mode::ALL {
            let minutes = self.minutes(mode);
            if minutes < MIN_MINUTES {
                return Err(SettingsError::InvalidDuration { mode, minutes });
            }
        }
        Ok(())
    }

    /// Read saved settings from `store`.
    ///
    /// Returns `None` when nothing was saved, when the store is unreadable, or
    /// when the saved value is malformed or below the minimum.
    pub fn load(store: &dyn KeyValueStore) -> Option<Self> {
        let value = match store.load(SETTINGS_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "could not read duration settings");
                return None;
            }
        };
        let settings: Self = match serde_json::from_value(value) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed duration settings");
                return None;
            }
        };
        if let Err(e) = settings.validate() {
            tracing::warn!(error = %e, "ignoring out-of-range duration settings");
            return None;
        }
        Some(settings)
    }

    /// Write these settings to `store`.
    ///
    /// # Errors
    /// Propagates the store's write failure.
    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        let value = serde_json::to_value(self).map_err(|e| StorageError::Corrupt {
            key: SETTINGS_KEY.to_string(),
            message: e.to_string(),
        })?;
        store.save(SETTINGS_KEY, &value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use serde_json::json;

    #[test]
    fn validate_reports_first_short_mode() {
        let err = DurationSettings::new(25, 0, 0).validate().unwrap_err();
        assert_eq!(
            err,
            SettingsError::InvalidDuration {
                mode: Mode::ShortBreak,
                minutes: 0
            }
        );
        assert!(DurationSettings::new(1, 1, 1).validate().is_ok());
    }

    #[test]
    fn load_returns_none_without_save() {
        let store = MemoryStore::new();
        assert_eq!(DurationSettings::load(&store), None);
    }

    #[test]
    fn save_then_load() {
        let store = MemoryStore::new();
        DurationSettings::new(50, 10, 30).save(&store).unwrap();
        assert_eq!(
            store.load(SETTINGS_KEY).unwrap(),
            Some(json!({"focus": 50, "short": 10, "long": 30}))
        );
        assert_eq!(
            DurationSettings::load(&store),
            Some(DurationSettings::new(50, 10, 30))
        );
    }

    #[test]
    fn malformed_values_load_as_absent() {
        let store = MemoryStore::new();
        for bad in [
            json!("25"),
            json!({"focus": 25, "short": 5}),
            json!({"focus": -1, "short": 5, "long": 15}),
            json!({"focus": 2.5, "short": 5, "long": 15}),
            json!({"focus": 0, "short": 5, "long": 15}),
        ] {
            store.save(SETTINGS_KEY, &bad).unwrap();
            assert_eq!(DurationSettings::load(&store), None, "accepted {bad}");
        }
    }
}
