//! Quick notes: one freeform text blob saved under [`NOTES_KEY`].

use crate::error::StorageError;
use crate::storage::KeyValueStore;

pub const NOTES_KEY: &str = "zenfocus_notes";

/// Saved notes, or an empty string when nothing usable is stored.
pub fn load(store: &dyn KeyValueStore) -> String {
    match store.load(NOTES_KEY) {
        Ok(Some(serde_json::Value::String(text))) => text,
        Ok(Some(other)) => {
            tracing::warn!(kind = ?other, "ignoring non-text notes value");
            String::new()
        }
        Ok(None) => String::new(),
        Err(e) => {
            tracing::warn!(error = %e, "could not read notes");
            String::new()
        }
    }
}

/// # Errors
/// Propagates the store's write failure.
pub fn save(store: &dyn KeyValueStore, text: &str) -> Result<(), StorageError> {
    store.save(NOTES_KEY, &serde_json::Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn empty_until_saved() {
        let store = MemoryStore::new();
        assert_eq!(load(&store), "");
        save(&store, "buy milk\ncall mum").unwrap();
        assert_eq!(load(&store), "buy milk\ncall mum");
    }

    #[test]
    fn non_string_value_reads_as_empty() {
        let store = MemoryStore::new();
        store.save(NOTES_KEY, &serde_json::json!(42)).unwrap();
        assert_eq!(load(&store), "");
    }
}
