use crate::store::KeyValue;
use anyhow::{Context, Result};
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::debug;

/// Durable store backed by a fjall keyspace with a single partition.
///
/// Values are UTF-8 JSON strings; reads that fail (backend error or invalid
/// UTF-8) surface as `None` so corrupt state degrades to defaults instead of
/// failing the caller.
pub struct DiskStore {
    keyspace: Keyspace,
    partition: PartitionHandle,
}

impl DiskStore {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create data directory: {}", path.display()))?;

        let keyspace = fjall::Config::new(path)
            .open()
            .with_context(|| format!("Failed to open store at {}", path.display()))?;
        let partition = keyspace
            .open_partition("state", PartitionCreateOptions::default())
            .context("Failed to open state partition")?;

        Ok(Self {
            keyspace,
            partition,
        })
    }
}

impl KeyValue for DiskStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.partition.get(key) {
            Ok(Some(bytes)) => match String::from_utf8(bytes.to_vec()) {
                Ok(value) => {
                    debug!("Store HIT for key: {key}");
                    Some(value)
                }
                Err(e) => {
                    debug!("Store value for {key} is not valid UTF-8: {e}");
                    None
                }
            },
            Ok(None) => {
                debug!("Store MISS for key: {key}");
                None
            }
            Err(e) => {
                debug!("DiskStore get error for {key}: {e}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        debug!("Store SET for key: {key}");
        if let Err(e) = self.partition.insert(key, value) {
            debug!("DiskStore set error for {key}: {e}");
            return;
        }
        // The store is write-through; flush the journal so each write is
        // durable on its own.
        if let Err(e) = self.keyspace.persist(PersistMode::Buffer) {
            debug!("DiskStore persist error for {key}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_get_set() {
        let dir = tempdir().unwrap();
        let store = DiskStore::open(dir.path()).unwrap();

        assert!(store.get("key1").is_none());

        store.set("key1", "value1");
        assert_eq!(store.get("key1").as_deref(), Some("value1"));

        store.set("key1", "value2");
        assert_eq!(store.get("key1").as_deref(), Some("value2"));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        {
            let store = DiskStore::open(dir.path()).unwrap();
            store.set("portfolios", "[]");
        }
        let store = DiskStore::open(dir.path()).unwrap();
        assert_eq!(store.get("portfolios").as_deref(), Some("[]"));
    }
}
