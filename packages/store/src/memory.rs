use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::{KeyValueStore, StorageError};

/// In-memory KeyValueStore for testing and non-browser targets.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<Mutex<usize>>,
    removals: Arc<Mutex<usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing values, as if left behind by a previous page load.
    pub fn with_values<'a>(values: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        {
            let mut map = store.values.lock().unwrap();
            for (k, v) in values {
                map.insert(k.to_string(), v.to_string());
            }
        }
        store
    }

    pub fn is_empty(&self) -> bool {
        self.values.lock().unwrap().is_empty()
    }

    /// Number of successful `set` calls.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    /// Number of `remove` calls that actually removed a value.
    pub fn removal_count(&self) -> usize {
        *self.removals.lock().unwrap()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }

    fn remove(&self, key: &str) {
        if self.values.lock().unwrap().remove(key).is_some() {
            *self.removals.lock().unwrap() += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{TOKEN_KEY, USER_KEY};

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get(TOKEN_KEY).is_none());

        store.set(TOKEN_KEY, "abc").unwrap();
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc"));
        assert_eq!(store.write_count(), 1);

        store.remove(TOKEN_KEY);
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_missing_key_is_not_counted() {
        let store = MemoryStore::with_values([(USER_KEY, "{}")]);
        store.remove(TOKEN_KEY);
        assert_eq!(store.removal_count(), 0);
        store.remove(USER_KEY);
        assert_eq!(store.removal_count(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        other.set(USER_KEY, "x").unwrap();
        assert_eq!(store.get(USER_KEY).as_deref(), Some("x"));
    }
}
