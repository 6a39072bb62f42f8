//! Configured duration for each timer mode.
//!
//! The registry is the only writer of durations. Validation happens in
//! [`DurationRegistry::set_all`]; reads never fail.

use std::collections::HashMap;

use super::mode::Mode;
use crate::error::SettingsError;
use crate::settings::DurationSettings;
use crate::storage::KeyValueStore;

/// Notified after the registry accepts new durations.
pub trait DurationObserver {
    fn durations_changed(&mut self, registry: &DurationRegistry);
}

/// Whether accepted settings reached durable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    Saved,
    /// The store rejected the write; the new durations apply for this
    /// session only.
    MemoryOnly,
}

pub struct DurationRegistry {
    secs: HashMap<Mode, u64>,
    store: Box<dyn KeyValueStore>,
}

impl DurationRegistry {
    /// Build the registry from saved settings, or the defaults when nothing
    /// usable was saved.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let settings = DurationSettings::load(store.as_ref()).unwrap_or_else(|| {
            tracing::debug!("no saved duration settings, using defaults");
            DurationSettings::default()
        });
        Self {
            secs: Self::to_secs(&settings),
            store,
        }
    }

    fn to_secs(settings: &DurationSettings) -> HashMap<Mode, u64> {
        Mode::ALL
            .into_iter()
            .map(|mode| (mode, settings.secs(mode)))
            .collect()
    }

    /// Duration of `mode` in seconds.
    pub fn get(&self, mode: Mode) -> u64 {
        self.secs
            .get(&mode)
            .copied()
            .unwrap_or_else(|| mode.default_secs())
    }

    /// Current durations in the persisted minute form.
    pub fn settings(&self) -> DurationSettings {
        let minutes = |mode: Mode| u32::try_from(self.get(mode) / 60).unwrap_or(u32::MAX);
        DurationSettings::new(
            minutes(Mode::Focus),
            minutes(Mode::ShortBreak),
            minutes(Mode::LongBreak),
        )
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Replace all three durations (in minutes) at once.
    ///
    /// On success the settings are saved (best-effort) and `observer` is told
    /// about the change. On failure nothing changes.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidDuration`] if any value is below one
    /// minute.
    pub fn set_all(
        &mut self,
        focus: u32,
        short: u32,
        long: u32,
        observer: &mut dyn DurationObserver,
    ) -> Result<Persistence, SettingsError> {
        let settings = DurationSettings::new(focus, short, long);
        settings.validate()?;

        self.secs = Self::to_secs(&settings);
        let persistence = match settings.save(self.store.as_ref()) {
            Ok(()) => Persistence::Saved,
            Err(e) => {
                tracing::warn!(error = %e, "duration settings kept in memory only");
                Persistence::MemoryOnly
            }
        };
        observer.durations_changed(self);
        Ok(persistence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::storage::MemoryStore;

    struct Counting(usize);

    impl DurationObserver for Counting {
        fn durations_changed(&mut self, _registry: &DurationRegistry) {
            self.0 += 1;
        }
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<serde_json::Value>, StorageError> {
            Err(StorageError::Unavailable("disk gone".into()))
        }

        fn save(&self, _key: &str, _value: &serde_json::Value) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disk gone".into()))
        }
    }

    #[test]
    fn defaults_without_saved_settings() {
        let registry = DurationRegistry::load(Box::new(MemoryStore::new()));
        assert_eq!(registry.get(Mode::Focus), 1500);
        assert_eq!(registry.get(Mode::ShortBreak), 300);
        assert_eq!(registry.get(Mode::LongBreak), 900);
    }

    #[test]
    fn loads_saved_minutes() {
        let store = MemoryStore::new();
        DurationSettings::new(50, 10, 20).save(&store).unwrap();
        let registry = DurationRegistry::load(Box::new(store));
        assert_eq!(registry.get(Mode::Focus), 3000);
        assert_eq!(registry.settings(), DurationSettings::new(50, 10, 20));
    }

    #[test]
    fn set_all_persists_and_notifies() {
        let mut registry = DurationRegistry::load(Box::new(MemoryStore::new()));
        let mut observer = Counting(0);
        let outcome = registry.set_all(30, 6, 18, &mut observer).unwrap();

        assert_eq!(outcome, Persistence::Saved);
        assert_eq!(observer.0, 1);
        assert_eq!(registry.get(Mode::ShortBreak), 360);
        assert_eq!(
            DurationSettings::load(registry.store()),
            Some(DurationSettings::new(30, 6, 18))
        );
    }

    #[test]
    fn rejected_settings_change_nothing() {
        let mut registry = DurationRegistry::load(Box::new(MemoryStore::new()));
        let mut observer = Counting(0);
        let err = registry.set_all(25, 0, 15, &mut observer).unwrap_err();

        assert!(matches!(
            err,
            SettingsError::InvalidDuration {
                mode: Mode::ShortBreak,
                ..
            }
        ));
        assert_eq!(observer.0, 0);
        assert_eq!(registry.get(Mode::ShortBreak), 300);
        assert_eq!(DurationSettings::load(registry.store()), None);
    }

    #[test]
    fn unavailable_store_degrades_to_memory() {
        let mut registry = DurationRegistry::load(Box::new(BrokenStore));
        assert_eq!(registry.get(Mode::Focus), 1500);

        let mut observer = Counting(0);
        let outcome = registry.set_all(40, 5, 15, &mut observer).unwrap();
        assert_eq!(outcome, Persistence::MemoryOnly);
        assert_eq!(registry.get(Mode::Focus), 2400);
        assert_eq!(observer.0, 1);
    }
}
