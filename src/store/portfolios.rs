//! Durable portfolio records over the key-value store.

use crate::core::portfolio::Portfolio;
use crate::store::KeyValue;
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

/// Store key for the saved-portfolio sequence.
pub const PORTFOLIOS_KEY: &str = "portfolios";

/// CRUD over the saved-portfolio sequence.
///
/// Every mutation re-serializes and replaces the whole `portfolios` value.
/// Out-of-range indices on update/delete are no-ops, and a corrupt stored
/// value reads as the empty list; the previous bytes stay in place until the
/// next successful write.
pub struct PortfolioStore {
    store: Arc<dyn KeyValue>,
}

impl PortfolioStore {
    pub fn new(store: Arc<dyn KeyValue>) -> Self {
        Self { store }
    }

    /// Snapshot of all saved portfolios, in save order.
    pub fn list(&self) -> Vec<Portfolio> {
        self.store
            .get(PORTFOLIOS_KEY)
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(portfolios) => Some(portfolios),
                Err(e) => {
                    debug!("Stored portfolios are unparseable, treating as empty: {e}");
                    None
                }
            })
            .unwrap_or_default()
    }

    fn persist(&self, portfolios: &[Portfolio]) {
        match serde_json::to_string(portfolios) {
            Ok(raw) => self.store.set(PORTFOLIOS_KEY, &raw),
            Err(e) => debug!("Failed to serialize portfolios: {e}"),
        }
    }

    /// Appends a new record, stamping `created_at`, and returns its index.
    pub fn create(&self, mut portfolio: Portfolio) -> usize {
        portfolio.created_at = Some(Utc::now());
        let mut all = self.list();
        all.push(portfolio);
        self.persist(&all);
        all.len() - 1
    }

    /// Replaces the record at `index` in place, re-stamping `created_at` to
    /// the update time. No-op when `index` is out of range.
    pub fn update(&self, index: usize, mut portfolio: Portfolio) {
        let mut all = self.list();
        let Some(slot) = all.get_mut(index) else {
            debug!("Update ignored, no portfolio at index {index}");
            return;
        };
        portfolio.created_at = Some(Utc::now());
        *slot = portfolio;
        self.persist(&all);
    }

    /// Removes the record at `index`, shifting later records down by one.
    /// No-op when `index` is out of range.
    pub fn delete(&self, index: usize) {
        let mut all = self.list();
        if index >= all.len() {
            debug!("Delete ignored, no portfolio at index {index}");
            return;
        }
        all.remove(index);
        self.persist(&all);
    }

    /// Owned copy of the record at `index`; edits to it do not touch the
    /// stored record until an explicit update.
    pub fn load(&self, index: usize) -> Option<Portfolio> {
        self.list().into_iter().nth(index)
    }
}
