//! In-memory key-value store.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::port::{KeyValueStore, USER_ID_KEY};

/// Key-value store backed by a map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// A store holding `user_id`.
    #[must_use]
    pub fn with_user(user_id: &str) -> Self {
        let store = Self::default();
        store.set(USER_ID_KEY, user_id);
        store
    }

    pub fn set(&self, key: &str, value: &str) {
        self.values.write().insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }
}
