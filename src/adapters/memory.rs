// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory configuration store adapter.
//!
//! This module provides a store that keeps records in a map guarded by a single
//! read-write lock. Nothing is persisted; the contents live as long as the store.

use crate::domain::{ConfigId, ConfigurationRecord, StoreError, StoreResult};
use crate::ports::ConfigStore;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

type RecordMap = BTreeMap<ConfigId, ConfigurationRecord>;

/// Configuration store backed by an in-memory map.
///
/// Every operation holds the lock for its whole duration, so the existence check and
/// the mutation of `create`, `update` and `delete` cannot interleave with another
/// call. Records are listed in ID order.
///
/// # Examples
///
/// ```rust
/// use config_registry::adapters::InMemoryStore;
/// use config_registry::domain::ConfigId;
/// use config_registry::ports::ConfigStore;
///
/// let store = InMemoryStore::new();
/// store.create(&ConfigId::from("b"), "B", "2").unwrap();
/// store.create(&ConfigId::from("a"), "A", "1").unwrap();
///
/// let ids: Vec<String> = store
///     .list_all()
///     .unwrap()
///     .iter()
///     .map(|r| r.id().to_string())
///     .collect();
/// assert_eq!(ids, vec!["a", "b"]);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<RecordMap>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given records.
    ///
    /// Later records replace earlier ones with the same ID.
    pub fn with_records(records: impl IntoIterator<Item = ConfigurationRecord>) -> Self {
        let map = records
            .into_iter()
            .map(|record| (record.id().clone(), record))
            .collect();
        Self {
            records: RwLock::new(map),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, RecordMap>> {
        self.records
            .read()
            .map_err(|_| StoreError::processing("Configuration store lock is poisoned."))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, RecordMap>> {
        self.records
            .write()
            .map_err(|_| StoreError::processing("Configuration store lock is poisoned."))
    }
}

impl ConfigStore for InMemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn list_all(&self) -> StoreResult<Vec<ConfigurationRecord>> {
        let records = self.read().map_err(|e| StoreError::ProcessingFailure {
            message: format!("Unable to get configuration list. {}", e),
            source: Some(Box::new(e)),
        })?;
        Ok(records.values().cloned().collect())
    }

    fn get(&self, id: &ConfigId) -> StoreResult<ConfigurationRecord> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })
    }

    fn create(&self, id: &ConfigId, name: &str, value: &str) -> StoreResult<ConfigurationRecord> {
        let mut records = self.write()?;
        match records.entry(id.clone()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists { id: id.clone() }),
            Entry::Vacant(slot) => {
                let record = ConfigurationRecord::new(id.clone(), name, value)?;
                slot.insert(record.clone());
                tracing::debug!("Created configuration '{}'", id);
                Ok(record)
            }
        }
    }

    fn update(&self, id: &ConfigId, name: &str, value: &str) -> StoreResult<ConfigurationRecord> {
        let mut records = self.write()?;
        let slot = records
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })?;
        let record = ConfigurationRecord::new(id.clone(), name, value)?;
        *slot = record.clone();
        tracing::debug!("Updated configuration '{}'", id);
        Ok(record)
    }

    fn delete(&self, id: &ConfigId) -> StoreResult<ConfigurationRecord> {
        let removed = self
            .write()?
            .remove(id)
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })?;
        tracing::debug!("Deleted configuration '{}'", id);
        Ok(removed)
    }
}
