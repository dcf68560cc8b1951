// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default configuration service implementation.
//!
//! This module provides the default implementation of the `ConfigurationService`
//! trait. It delegates every call to a [`ConfigStore`] and turns store failures into
//! [`ServiceError`]s with an operation-specific message.

use crate::adapters::InMemoryStore;
use crate::domain::{
    ConfigId, ConfigurationRecord, ConfigurationService, ErrorKind, ServiceError,
    ServiceResult, StoreError,
};
use crate::ports::ConfigStore;
use std::sync::Arc;

const LIST_FAILED: &str = "Error retrieving configuration list.";
const GET_FAILED: &str = "Error retrieving configuration.";
const CREATE_FAILED: &str = "Error creating new configuration.";
const UPDATE_FAILED: &str = "Error updating configuration.";
const DELETE_FAILED: &str = "Error deleting configuration.";

/// Default implementation of the configuration service.
///
/// The service owns a shared handle to its store. Each operation keeps the store
/// error kinds it expects (for example `NotFound` for `get`) and reports anything
/// else as [`ErrorKind::ProcessingFailure`].
///
/// # Examples
///
/// ```rust
/// use config_registry::prelude::*;
///
/// # fn main() -> ServiceResult<()> {
/// let service = DefaultConfigService::builder()
///     .with_in_memory_store()
///     .build();
///
/// let id = ConfigId::from("test1");
/// service.create(&id, "Test Configuration 1", "test-1")?;
/// service.update(&id, "Test Configuration 1", "test-1a")?;
/// assert_eq!(service.get(&id)?.value(), "test-1a");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DefaultConfigService {
    store: Arc<dyn ConfigStore>,
}

impl DefaultConfigService {
    /// Creates a service backed by a new, empty in-memory store.
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryStore::new()))
    }

    /// Creates a service backed by the given store.
    pub fn with_store(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// Creates a new configuration service builder.
    pub fn builder() -> ConfigurationServiceBuilder {
        ConfigurationServiceBuilder::new()
    }

    /// Returns the store this service delegates to.
    pub fn store(&self) -> &Arc<dyn ConfigStore> {
        &self.store
    }

    /// Wraps a store failure, keeping its kind only if the operation expects it.
    fn wrap(&self, message: &'static str, expected: &[ErrorKind], err: StoreError) -> ServiceError {
        let kind = if expected.contains(&err.kind()) {
            err.kind()
        } else {
            ErrorKind::ProcessingFailure
        };

        if kind == ErrorKind::ProcessingFailure {
            tracing::warn!(
                "Store '{}' failed unexpectedly: {} ({})",
                self.store.name(),
                message,
                err
            );
        } else {
            tracing::debug!("{} Caused by: {}", message, err);
        }

        ServiceError::new(kind, message, err)
    }
}

impl Default for DefaultConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DefaultConfigService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultConfigService")
            .field("store", &self.store.name())
            .finish()
    }
}

impl ConfigurationService for DefaultConfigService {
    fn list_all(&self) -> ServiceResult<Vec<ConfigurationRecord>> {
        self.store
            .list_all()
            .map_err(|e| self.wrap(LIST_FAILED, &[], e))
    }

    fn get(&self, id: &ConfigId) -> ServiceResult<ConfigurationRecord> {
        self.store
            .get(id)
            .map_err(|e| self.wrap(GET_FAILED, &[ErrorKind::NotFound], e))
    }

    fn create(
        &self,
        id: &ConfigId,
        name: &str,
        value: &str,
    ) -> ServiceResult<ConfigurationRecord> {
        let record = self.store.create(id, name, value).map_err(|e| {
            self.wrap(
                CREATE_FAILED,
                &[ErrorKind::AlreadyExists, ErrorKind::InvalidInput],
                e,
            )
        })?;
        tracing::info!("Configuration '{}' created", id);
        Ok(record)
    }

    fn update(
        &self,
        id: &ConfigId,
        name: &str,
        value: &str,
    ) -> ServiceResult<ConfigurationRecord> {
        let record = self.store.update(id, name, value).map_err(|e| {
            self.wrap(
                UPDATE_FAILED,
                &[ErrorKind::NotFound, ErrorKind::InvalidInput],
                e,
            )
        })?;
        tracing::info!("Configuration '{}' updated", id);
        Ok(record)
    }

    fn delete(&self, id: &ConfigId) -> ServiceResult<ConfigurationRecord> {
        let record = self
            .store
            .delete(id)
            .map_err(|e| self.wrap(DELETE_FAILED, &[ErrorKind::NotFound], e))?;
        tracing::info!("Configuration '{}' deleted", id);
        Ok(record)
    }
}

/// Builder for constructing a `DefaultConfigService`.
///
/// Without an explicit store the service gets a fresh [`InMemoryStore`].
///
/// # Examples
///
/// ```rust
/// use config_registry::adapters::InMemoryStore;
/// use config_registry::service::ConfigurationServiceBuilder;
/// use std::sync::Arc;
///
/// let store = Arc::new(InMemoryStore::new());
/// let service = ConfigurationServiceBuilder::new()
///     .with_store(store.clone())
///     .build();
/// assert_eq!(service.store().name(), "memory");
/// ```
#[derive(Default)]
pub struct ConfigurationServiceBuilder {
    store: Option<Arc<dyn ConfigStore>>,
}

impl ConfigurationServiceBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self { store: None }
    }

    /// Uses the given store.
    pub fn with_store(mut self, store: Arc<dyn ConfigStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Uses a new, empty in-memory store.
    pub fn with_in_memory_store(self) -> Self {
        self.with_store(Arc::new(InMemoryStore::new()))
    }

    /// Builds the configuration service.
    pub fn build(self) -> DefaultConfigService {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(InMemoryStore::new()));
        tracing::debug!("Configuration service using '{}' store", store.name());
        DefaultConfigService::with_store(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StoreResult;
    use std::error::Error as _;

    // Store whose every call fails with the configured error kind
    struct FailingStore {
        kind: ErrorKind,
    }

    impl FailingStore {
        fn error(&self, id: &ConfigId) -> StoreError {
            match self.kind {
                ErrorKind::InvalidInput => StoreError::InvalidInput { field: "name" },
                ErrorKind::NotFound => StoreError::NotFound { id: id.clone() },
                ErrorKind::AlreadyExists => StoreError::AlreadyExists { id: id.clone() },
                ErrorKind::ProcessingFailure => StoreError::processing("backend offline"),
            }
        }
    }

    impl ConfigStore for FailingStore {
        fn name(&self) -> &str {
            "failing"
        }

        fn list_all(&self) -> StoreResult<Vec<ConfigurationRecord>> {
            Err(self.error(&ConfigId::from("*")))
        }

        fn get(&self, id: &ConfigId) -> StoreResult<ConfigurationRecord> {
            Err(self.error(id))
        }

        fn create(&self, id: &ConfigId, _: &str, _: &str) -> StoreResult<ConfigurationRecord> {
            Err(self.error(id))
        }

        fn update(&self, id: &ConfigId, _: &str, _: &str) -> StoreResult<ConfigurationRecord> {
            Err(self.error(id))
        }

        fn delete(&self, id: &ConfigId) -> StoreResult<ConfigurationRecord> {
            Err(self.error(id))
        }
    }

    fn failing(kind: ErrorKind) -> DefaultConfigService {
        DefaultConfigService::with_store(Arc::new(FailingStore { kind }))
    }

    #[test]
    fn test_default_service_uses_memory_store() {
        let service = DefaultConfigService::default();
        assert_eq!(service.store().name(), "memory");
        assert!(service.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_create_conflict_message() {
        let service = DefaultConfigService::new();
        let id = ConfigId::from("test1");
        service.create(&id, "Test Configuration 1", "test-1").unwrap();

        let err = service.create(&id, "Test Exception", "x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(
            err.to_string(),
            "Error creating new configuration. Caused by: ID test1 is already in use."
        );
    }

    #[test]
    fn test_get_missing_message() {
        let service = DefaultConfigService::new();
        let err = service.get(&ConfigId::from("test-exception")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "Error retrieving configuration.");
        assert!(err
            .to_string()
            .contains("No existing configuration for ID test-exception."));
    }

    #[test]
    fn test_update_and_delete_missing() {
        let service = DefaultConfigService::new();
        let id = ConfigId::from("missing");

        let err = service.update(&id, "n", "v").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "Error updating configuration.");

        let err = service.delete(&id).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "Error deleting configuration.");
    }

    #[test]
    fn test_invalid_input_passes_through_on_create() {
        let service = DefaultConfigService::new();
        let err = service.create(&ConfigId::from("x"), "", "v").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_list_failure_is_processing_failure() {
        let service = failing(ErrorKind::NotFound);
        let err = service.list_all().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProcessingFailure);
        assert_eq!(err.message(), "Error retrieving configuration list.");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_unexpected_kinds_become_processing_failures() {
        let id = ConfigId::from("x");

        let err = failing(ErrorKind::NotFound).create(&id, "n", "v").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProcessingFailure);

        let err = failing(ErrorKind::AlreadyExists)
            .update(&id, "n", "v")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProcessingFailure);

        let err = failing(ErrorKind::InvalidInput).delete(&id).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProcessingFailure);

        let err = failing(ErrorKind::ProcessingFailure).get(&id).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProcessingFailure);
        assert_eq!(
            err.to_string(),
            "Error retrieving configuration. Caused by: backend offline"
        );
    }

    #[test]
    fn test_store_error_kind_preserved_in_source() {
        let err = failing(ErrorKind::AlreadyExists)
            .update(&ConfigId::from("x"), "n", "v")
            .unwrap_err();
        assert_eq!(err.store_error().kind(), ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_builder_defaults_to_memory_store() {
        let service = ConfigurationServiceBuilder::default().build();
        assert_eq!(service.store().name(), "memory");
    }

    #[test]
    fn test_builder_with_store_shares_state() {
        let store = Arc::new(InMemoryStore::new());
        let service = DefaultConfigService::builder()
            .with_store(store.clone())
            .build();

        service.create(&ConfigId::from("a"), "A", "1").unwrap();
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_cloned_service_shares_store() {
        let service = DefaultConfigService::new();
        let clone = service.clone();
        service.create(&ConfigId::from("a"), "A", "1").unwrap();
        assert_eq!(clone.get(&ConfigId::from("a")).unwrap().name(), "A");
    }

    #[test]
    fn test_debug_shows_store_name() {
        let service = DefaultConfigService::new();
        assert!(format!("{:?}", service).contains("memory"));
    }
}
