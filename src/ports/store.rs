// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration store trait definition.
//!
//! This module defines the `ConfigStore` trait, the port every storage backend
//! implements. The registry ships an in-memory backend; databases or remote key-value
//! services would plug in here.

use crate::domain::{ConfigId, ConfigurationRecord, StoreResult};

/// A trait for configuration record stores.
///
/// A store is the authoritative mapping from [`ConfigId`] to
/// [`ConfigurationRecord`]. It holds at most one record per ID.
///
/// # Contract
///
/// - `get`, `update` and `delete` fail with
///   [`StoreError::NotFound`](crate::domain::StoreError::NotFound) when no record
///   exists for the ID.
/// - `create` fails with
///   [`StoreError::AlreadyExists`](crate::domain::StoreError::AlreadyExists) when a
///   record exists for the ID.
/// - Empty IDs, names or values fail with
///   [`StoreError::InvalidInput`](crate::domain::StoreError::InvalidInput).
/// - Mutations are atomic: the existence check and the change happen together, and a
///   failed call leaves the mapping unchanged.
/// - Returned records are owned copies. Callers never hold a reference into the store.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; a single store is shared by all requests.
///
/// # Examples
///
/// ```rust
/// use config_registry::adapters::InMemoryStore;
/// use config_registry::domain::ConfigId;
/// use config_registry::ports::ConfigStore;
///
/// let store = InMemoryStore::new();
/// let id = ConfigId::from("test1");
///
/// store.create(&id, "Test Configuration 1", "test-1").unwrap();
/// assert!(store.create(&id, "Again", "x").is_err());
/// assert_eq!(store.delete(&id).unwrap().value(), "test-1");
/// assert!(store.is_empty().unwrap());
/// ```
pub trait ConfigStore: Send + Sync {
    /// Returns the name of this backend, used in log messages.
    fn name(&self) -> &str;

    /// Returns every stored record.
    ///
    /// The order is backend-defined but consistent between calls on an unchanged store.
    fn list_all(&self) -> StoreResult<Vec<ConfigurationRecord>>;

    /// Returns the record stored under `id`.
    fn get(&self, id: &ConfigId) -> StoreResult<ConfigurationRecord>;

    /// Stores a new record under `id` and returns it.
    fn create(&self, id: &ConfigId, name: &str, value: &str) -> StoreResult<ConfigurationRecord>;

    /// Replaces the record stored under `id` and returns the new record.
    fn update(&self, id: &ConfigId, name: &str, value: &str) -> StoreResult<ConfigurationRecord>;

    /// Removes the record stored under `id` and returns it as it was before removal.
    fn delete(&self, id: &ConfigId) -> StoreResult<ConfigurationRecord>;

    /// Returns the number of stored records.
    fn len(&self) -> StoreResult<usize> {
        self.list_all().map(|records| records.len())
    }

    /// Returns `true` if the store holds no records.
    fn is_empty(&self) -> StoreResult<bool> {
        self.len().map(|len| len == 0)
    }
}
