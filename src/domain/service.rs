// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration service trait definition.
//!
//! This module defines the `ConfigurationService` trait, the single entry point that
//! boundary code (the HTTP layer, tests, embedding applications) uses to manage
//! configuration records.

use crate::domain::{ConfigId, ConfigurationRecord, ServiceResult};

/// The configuration registry service.
///
/// There is one method per store operation. Implementations delegate to a
/// [`ConfigStore`](crate::ports::ConfigStore) and report failures as
/// [`ServiceError`](crate::domain::ServiceError)s that keep the store error as their
/// source.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; a single service instance is shared by all
/// concurrent requests.
///
/// # Examples
///
/// ```rust
/// use config_registry::domain::{ConfigId, ConfigurationService};
/// use config_registry::service::DefaultConfigService;
///
/// let service = DefaultConfigService::new();
/// let id = ConfigId::from("test1");
///
/// service.create(&id, "Test Configuration 1", "test-1").unwrap();
/// assert_eq!(service.get(&id).unwrap().value(), "test-1");
/// ```
pub trait ConfigurationService: Send + Sync {
    /// Returns every stored configuration record.
    fn list_all(&self) -> ServiceResult<Vec<ConfigurationRecord>>;

    /// Returns the record stored under `id`.
    ///
    /// Fails with [`ErrorKind::NotFound`](crate::domain::ErrorKind::NotFound) when no
    /// record exists.
    fn get(&self, id: &ConfigId) -> ServiceResult<ConfigurationRecord>;

    /// Creates a new record under `id`.
    ///
    /// Fails with [`ErrorKind::AlreadyExists`](crate::domain::ErrorKind::AlreadyExists)
    /// when the ID is taken.
    fn create(&self, id: &ConfigId, name: &str, value: &str)
        -> ServiceResult<ConfigurationRecord>;

    /// Replaces the record stored under `id` with a new one.
    ///
    /// Fails with [`ErrorKind::NotFound`](crate::domain::ErrorKind::NotFound) when no
    /// record exists.
    fn update(&self, id: &ConfigId, name: &str, value: &str)
        -> ServiceResult<ConfigurationRecord>;

    /// Removes the record stored under `id` and returns it.
    ///
    /// Fails with [`ErrorKind::NotFound`](crate::domain::ErrorKind::NotFound) when no
    /// record exists.
    fn delete(&self, id: &ConfigId) -> ServiceResult<ConfigurationRecord>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorKind, ServiceError, StoreError};

    // Service that knows a single fixed record
    struct TestConfigService;

    fn fixed() -> ConfigurationRecord {
        ConfigurationRecord::new(ConfigId::from("fixed"), "Fixed", "1").unwrap()
    }

    fn not_found(id: &ConfigId) -> ServiceError {
        ServiceError::new(
            ErrorKind::NotFound,
            "Error retrieving configuration.",
            StoreError::NotFound { id: id.clone() },
        )
    }

    impl ConfigurationService for TestConfigService {
        fn list_all(&self) -> ServiceResult<Vec<ConfigurationRecord>> {
            Ok(vec![fixed()])
        }

        fn get(&self, id: &ConfigId) -> ServiceResult<ConfigurationRecord> {
            if id.as_str() == "fixed" {
                Ok(fixed())
            } else {
                Err(not_found(id))
            }
        }

        fn create(
            &self,
            id: &ConfigId,
            _name: &str,
            _value: &str,
        ) -> ServiceResult<ConfigurationRecord> {
            Err(ServiceError::new(
                ErrorKind::AlreadyExists,
                "Error creating new configuration.",
                StoreError::AlreadyExists { id: id.clone() },
            ))
        }

        fn update(
            &self,
            id: &ConfigId,
            name: &str,
            value: &str,
        ) -> ServiceResult<ConfigurationRecord> {
            ConfigurationRecord::new(id.clone(), name, value).map_err(|e| {
                ServiceError::new(ErrorKind::InvalidInput, "Error updating configuration.", e)
            })
        }

        fn delete(&self, id: &ConfigId) -> ServiceResult<ConfigurationRecord> {
            self.get(id)
        }
    }

    #[test]
    fn test_service_list_all() {
        let service = TestConfigService;
        assert_eq!(service.list_all().unwrap(), vec![fixed()]);
    }

    #[test]
    fn test_service_get_missing() {
        let service = TestConfigService;
        let err = service.get(&ConfigId::from("other")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_service_create_conflict() {
        let service = TestConfigService;
        let err = service
            .create(&ConfigId::from("fixed"), "Fixed", "2")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_service_update_invalid() {
        let service = TestConfigService;
        let err = service
            .update(&ConfigId::from("fixed"), "", "2")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_service_is_object_safe_and_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ConfigurationService>();

        let service: Box<dyn ConfigurationService> = Box::new(TestConfigService);
        assert_eq!(service.delete(&ConfigId::from("fixed")).unwrap(), fixed());
    }
}
