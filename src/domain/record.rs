// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configuration record value type.

use crate::domain::errors::{StoreError, StoreResult};
use crate::domain::ConfigId;
use serde::Serialize;

/// An immutable `{id, name, value}` configuration entry.
///
/// All three fields are non-empty. A record is never modified in place; updating a
/// configuration replaces the stored record with a new one.
///
/// # Examples
///
/// ```
/// use config_registry::domain::{ConfigId, ConfigurationRecord};
///
/// let record = ConfigurationRecord::new(
///     ConfigId::from("test1"),
///     "Test Configuration 1",
///     "test-1",
/// ).unwrap();
///
/// assert_eq!(record.id().as_str(), "test1");
/// assert_eq!(record.name(), "Test Configuration 1");
/// assert_eq!(record.value(), "test-1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ConfigurationRecord {
    id: ConfigId,
    name: String,
    value: String,
}

impl ConfigurationRecord {
    /// Creates a new record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidInput`] naming the first empty field.
    pub fn new(
        id: ConfigId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> StoreResult<Self> {
        let name = name.into();
        let value = value.into();

        if id.is_empty() {
            return Err(StoreError::InvalidInput { field: "id" });
        }
        if name.is_empty() {
            return Err(StoreError::InvalidInput { field: "name" });
        }
        if value.is_empty() {
            return Err(StoreError::InvalidInput { field: "value" });
        }

        Ok(Self { id, name, value })
    }

    /// Returns the record ID.
    pub fn id(&self) -> &ConfigId {
        &self.id
    }

    /// Returns the record name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the record value.
    pub fn value(&self) -> &str {
        &self.value
    }
}
