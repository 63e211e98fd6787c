pub mod disk;
pub mod memory;
pub mod portfolios;

/// Whole-value key-value persistence.
///
/// Every write replaces the entire value under a key; there is no partial
/// update, so consumers read, modify, and write back the full collection.
/// Backend failures are logged by implementations and surface as `None` on
/// read, never as an error to the caller.
pub trait KeyValue: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}
