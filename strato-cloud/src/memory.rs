//! In-memory record store.
//!
//! Keeps records in an insertion-ordered map behind an `RwLock`. Used as
//! the gateway's store when no table endpoint is configured, and by
//! tests as a substitutable stand-in for the managed table.

use std::sync::RwLock;

use async_trait::async_trait;
use indexmap::IndexMap;

use strato_core::{NetworkRecord, RecordId};

use crate::api::RecordStore;
use crate::CloudError;

/// Thread-safe in-memory record table.
///
/// `scan` returns records in insertion order. Operations never error.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: RwLock<IndexMap<RecordId, NetworkRecord>>,
}

impl MemoryRecordStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned (a previous thread
    /// panicked while holding the lock).
    #[must_use]
    pub fn len(&self) -> usize {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.records
            .read()
            .expect("record store read lock poisoned")
            .len()
    }

    /// Returns `true` if no records are stored.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn put(&self, record: NetworkRecord) -> Result<(), CloudError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.records
            .write()
            .expect("record store write lock poisoned")
            .insert(record.id, record);
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<NetworkRecord>, CloudError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let records = self
            .records
            .read()
            .expect("record store read lock poisoned")
            .values()
            .cloned()
            .collect();
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use strato_core::{NetworkId, SubnetId};

    use super::*;

    fn record(network: &str) -> NetworkRecord {
        NetworkRecord::new(
            NetworkId::new(network),
            vec![SubnetId::new(format!("{network}-subnet-0"))],
        )
    }

    #[tokio::test]
    async fn empty_store_scans_to_empty_vec() {
        let store = MemoryRecordStore::new();
        let records = match store.scan().await {
            Ok(r) => r,
            Err(e) => panic!("scan failed: {e}"),
        };
        assert!(records.is_empty(), "empty store must scan to an empty vec");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn put_then_scan_returns_records_in_insertion_order() {
        let store = MemoryRecordStore::new();
        let first = record("vpc-a");
        let second = record("vpc-b");

        store.put(first.clone()).await.ok();
        store.put(second.clone()).await.ok();

        let records = match store.scan().await {
            Ok(r) => r,
            Err(e) => panic!("scan failed: {e}"),
        };
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], first, "scan must preserve insertion order");
        assert_eq!(records[1], second);
    }
}
