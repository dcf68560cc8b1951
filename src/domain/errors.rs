// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration registry.
//!
//! Store backends report failures as [`StoreError`]. The service layer wraps them in a
//! [`ServiceError`] that adds an operation-specific message. Both expose an
//! [`ErrorKind`] so callers can branch on the failure without parsing messages.

use crate::domain::ConfigId;
use std::fmt;
use thiserror::Error;

/// The kind of a registry failure.
///
/// The HTTP boundary maps each kind to a status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required argument was missing or empty.
    InvalidInput,
    /// The referenced configuration does not exist.
    NotFound,
    /// A configuration with the given ID already exists.
    AlreadyExists,
    /// Any other failure while processing a request.
    ProcessingFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidInput => "invalid input",
            ErrorKind::NotFound => "not found",
            ErrorKind::AlreadyExists => "already exists",
            ErrorKind::ProcessingFailure => "processing failure",
        };
        f.write_str(name)
    }
}

/// Errors reported by a configuration store.
///
/// The messages of `NotFound` and `AlreadyExists` are part of the HTTP error bodies
/// and are kept stable.
///
/// # Examples
///
/// ```
/// use config_registry::domain::{ErrorKind, StoreError};
///
/// let error = StoreError::NotFound { id: "test1".into() };
/// assert_eq!(error.kind(), ErrorKind::NotFound);
/// assert_eq!(error.to_string(), "No existing configuration for ID test1.");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// A required field was empty.
    #[error("Invalid configuration input: {field} must not be empty.")]
    InvalidInput {
        /// The name of the offending field
        field: &'static str,
    },

    /// No record exists for the ID.
    #[error("No existing configuration for ID {id}.")]
    NotFound {
        /// The ID that was looked up
        id: ConfigId,
    },

    /// A record already exists for the ID.
    #[error("ID {id} is already in use.")]
    AlreadyExists {
        /// The ID that is taken
        id: ConfigId,
    },

    /// The store failed for a reason unrelated to the request.
    #[error("{message}")]
    ProcessingFailure {
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl StoreError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::InvalidInput { .. } => ErrorKind::InvalidInput,
            StoreError::NotFound { .. } => ErrorKind::NotFound,
            StoreError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            StoreError::ProcessingFailure { .. } => ErrorKind::ProcessingFailure,
        }
    }

    /// Creates a `ProcessingFailure` without an underlying cause.
    pub fn processing(message: impl Into<String>) -> Self {
        StoreError::ProcessingFailure {
            message: message.into(),
            source: None,
        }
    }
}

/// Errors reported by the configuration service.
///
/// The display form is `"<operation message> Caused by: <store message>"`, which is
/// what HTTP clients see in the `error` field.
///
/// # Examples
///
/// ```
/// use config_registry::domain::{ErrorKind, ServiceError, StoreError};
///
/// let error = ServiceError::new(
///     ErrorKind::AlreadyExists,
///     "Error creating new configuration.",
///     StoreError::AlreadyExists { id: "test1".into() },
/// );
/// assert_eq!(
///     error.to_string(),
///     "Error creating new configuration. Caused by: ID test1 is already in use."
/// );
/// ```
#[derive(Debug, Error)]
#[error("{message} Caused by: {source}")]
pub struct ServiceError {
    kind: ErrorKind,
    message: String,
    #[source]
    source: StoreError,
}

impl ServiceError {
    /// Creates a new service error wrapping a store failure.
    pub fn new(kind: ErrorKind, message: impl Into<String>, source: StoreError) -> Self {
        Self {
            kind,
            message: message.into(),
            source,
        }
    }

    /// Returns the kind the service assigned to this failure.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the operation-specific message, without the cause.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the store failure this error wraps.
    pub fn store_error(&self) -> &StoreError {
        &self.source
    }
}

/// Result type returned by store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type returned by service operations.
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
