use crate::store::KeyValue;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// In-memory store backed by a HashMap. Used in tests and for ephemeral
/// embedding.
pub struct MemoryStore {
    inner: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let map = self.inner.read().unwrap();
        let value = map.get(key).cloned();
        if value.is_some() {
            debug!("Store HIT for key: {key}");
        } else {
            debug!("Store MISS for key: {key}");
        }
        value
    }

    fn set(&self, key: &str, value: &str) {
        let mut map = self.inner.write().unwrap();
        debug!("Store SET for key: {key}");
        map.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let store = MemoryStore::new();

        assert!(store.get("key1").is_none());

        store.set("key1", "value1");
        assert_eq!(store.get("key1").as_deref(), Some("value1"));

        // Whole-value replace
        store.set("key1", "value2");
        assert_eq!(store.get("key1").as_deref(), Some("value2"));

        assert!(store.get("key2").is_none());
    }
}
