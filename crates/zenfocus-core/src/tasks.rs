//! Persisted task list.
//!
//! Newest tasks go on top. The list is saved whole under [`TASKS_KEY`] after
//! every change.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::storage::KeyValueStore;

pub const TASKS_KEY: &str = "zenfocus_tasks";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Creation time in epoch milliseconds, bumped if needed to stay unique.
    pub id: i64,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the saved list. Missing, unreadable or malformed data yields an
    /// empty list.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let value = match store.load(TASKS_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => return Self::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read task list");
                return Self::new();
            }
        };
        match serde_json::from_value::<Vec<Task>>(value) {
            Ok(tasks) => Self { tasks },
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed task list");
                Self::new()
            }
        }
    }

    /// # Errors
    /// Propagates the store's write failure.
    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        let value = serde_json::to_value(&self.tasks).map_err(|e| StorageError::Corrupt {
            key: TASKS_KEY.to_string(),
            message: e.to_string(),
        })?;
        store.save(TASKS_KEY, &value)
    }

    /// Add a task to the top of the list. Blank text is ignored.
    pub fn add(&mut self, text: &str) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let now = Utc::now().timestamp_millis();
        let id = match self.tasks.iter().map(|t| t.id).max() {
            Some(max) if max >= now => max + 1,
            _ => now,
        };
        self.tasks.insert(
            0,
            Task {
                id,
                text: text.to_string(),
                completed: false,
            },
        );
        self.tasks.first()
    }

    /// Flip a task's completed flag. Returns false if no task has `id`.
    pub fn toggle(&mut self, id: i64) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove a task. Returns false if no task has `id`.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Number of tasks not yet completed.
    pub fn remaining_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use serde_json::json;

    #[test]
    fn add_puts_newest_on_top() {
        let mut list = TaskList::new();
        list.add("first");
        list.add("  second  ");
        let texts: Vec<&str> = list.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["second", "first"]);
        assert_ne!(list.tasks()[0].id, list.tasks()[1].id);
    }

    #[test]
    fn blank_text_is_ignored() {
        let mut list = TaskList::new();
        assert!(list.add("   ").is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn toggle_and_delete() {
        let mut list = TaskList::new();
        let id = list.add("write report").unwrap().id;
        list.add("call back");
        assert_eq!(list.remaining_count(), 2);

        assert!(list.toggle(id));
        assert_eq!(list.remaining_count(), 1);
        assert!(list.toggle(id));
        assert_eq!(list.remaining_count(), 2);

        assert!(list.delete(id));
        assert!(!list.delete(id));
        assert!(!list.toggle(id));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn save_then_load() {
        let store = MemoryStore::new();
        let mut list = TaskList::new();
        list.add("persist me");
        list.save(&store).unwrap();
        assert_eq!(TaskList::load(&store), list);
    }

    #[test]
    fn malformed_list_loads_empty() {
        let store = MemoryStore::new();
        store.save(TASKS_KEY, &json!({"not": "a list"})).unwrap();
        assert!(TaskList::load(&store).is_empty());
    }
}
