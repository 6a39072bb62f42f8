//! Startup with an unusable data directory.
//!
//! Kept in its own test binary because it sets `ZENFOCUS_DATA_DIR` for the
//! whole process.

use zenfocus_core::sinks::Silent;
use zenfocus_core::storage::open_store;
use zenfocus_core::{
    Config, Database, DurationRegistry, FocusTimer, KeyValueStore, ManualScheduler, Mode,
};

#[test]
fn test_unavailable_database_falls_back_to_memory() {
    let dir = tempfile::tempdir().unwrap();
    let not_a_dir = dir.path().join("occupied");
    std::fs::write(&not_a_dir, "a file where the data directory should be").unwrap();
    std::env::set_var("ZENFOCUS_DATA_DIR", &not_a_dir);

    assert!(Database::open().is_err());

    let store = open_store(&Config::default());
    assert_eq!(store.load("zenfocus_notes").unwrap(), None);
    store
        .save("zenfocus_notes", &serde_json::json!("kept for the session"))
        .unwrap();
    assert_eq!(
        store.load("zenfocus_notes").unwrap(),
        Some(serde_json::json!("kept for the session"))
    );

    let mut timer = FocusTimer::new(
        DurationRegistry::load(store),
        Box::new(ManualScheduler::new()),
        Box::new(Silent),
        Box::new(Silent),
        Box::new(Silent),
    );
    timer.update_settings(1, 1, 1).unwrap();
    assert_eq!(timer.registry().get(Mode::Focus), 60);
    assert_eq!(timer.state().remaining_secs, 60);

    std::env::remove_var("ZENFOCUS_DATA_DIR");
}
