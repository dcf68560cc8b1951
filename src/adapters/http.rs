// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP adapter exposing the configuration service as a JSON API.
//!
//! | Method | Path    | Success                       |
//! |--------|---------|-------------------------------|
//! | GET    | `/`     | 200, array of records         |
//! | GET    | `/{id}` | 200, record                   |
//! | POST   | `/{id}` | 201, created record           |
//! | PUT    | `/{id}` | 200, updated record           |
//! | DELETE | `/{id}` | 200, record as it was deleted |
//!
//! Failures are answered with `{"error": "<message>"}`. Service errors take their
//! status code from the [`ErrorKind`]; undecodable paths and bodies get 400.

use crate::domain::{ConfigId, ConfigurationRecord, ConfigurationService, ErrorKind, ServiceError};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Message returned when a request body is missing, malformed, or has a blank field.
pub const INVALID_PARAMETERS: &str = "Submitted configuration parameters are not valid.";

/// Message returned when the configuration ID in the request path cannot be decoded.
pub const INVALID_ID: &str = "Requested configuration ID is not valid.";

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    service: Arc<dyn ConfigurationService>,
}

impl AppState {
    /// Creates handler state around a service.
    pub fn new(service: Arc<dyn ConfigurationService>) -> Self {
        Self { service }
    }
}

/// Request body for creating or updating a configuration.
///
/// Both fields are optional at the parsing level so that a missing field is reported
/// with the same message as a blank one.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RecordInput {
    /// The configuration name
    pub name: Option<String>,
    /// The configuration value
    pub value: Option<String>,
}

impl RecordInput {
    /// Returns the name and value if both are present and not blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_registry::adapters::http::RecordInput;
    ///
    /// let input = RecordInput {
    ///     name: Some("Name".into()),
    ///     value: Some("   ".into()),
    /// };
    /// assert!(input.validate().is_err());
    /// ```
    pub fn validate(self) -> Result<(String, String), ApiError> {
        match (self.name, self.value) {
            (Some(name), Some(value)) if !name.trim().is_empty() && !value.trim().is_empty() => {
                Ok((name, value))
            }
            _ => Err(ApiError::invalid_parameters()),
        }
    }
}

/// An error response of the HTTP API.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Creates an error response with an explicit status.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// The 400 response for invalid request bodies.
    pub fn invalid_parameters() -> Self {
        Self::new(StatusCode::BAD_REQUEST, INVALID_PARAMETERS)
    }

    /// Returns the HTTP status of this error.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the message placed in the `error` field.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Maps an error kind to the HTTP status reported for it.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::AlreadyExists => StatusCode::CONFLICT,
        ErrorKind::ProcessingFailure => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::new(status_for(err.kind()), err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        Self::invalid_parameters()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Rejected request path: {}", rejection.body_text());
        Self::new(StatusCode::BAD_REQUEST, INVALID_ID)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = %self.message, "request failed");
        } else {
            tracing::debug!(status = %self.status, error = %self.message, "request rejected");
        }
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

/// Builds the router serving the configuration API.
///
/// # Examples
///
/// ```rust
/// use config_registry::adapters::http;
/// use config_registry::service::DefaultConfigService;
/// use std::sync::Arc;
///
/// let app: axum::Router = http::router(Arc::new(DefaultConfigService::new()));
/// ```
pub fn router(service: Arc<dyn ConfigurationService>) -> Router {
    Router::new()
        .route("/", get(list_configurations))
        .route(
            "/:id",
            get(get_configuration)
                .post(create_configuration)
                .put(update_configuration)
                .delete(delete_configuration),
        )
        .with_state(AppState::new(service))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

async fn list_configurations(
    State(state): State<AppState>,
) -> Result<Json<Vec<ConfigurationRecord>>, ApiError> {
    Ok(Json(state.service.list_all()?))
}

async fn get_configuration(
    State(state): State<AppState>,
    id: Result<Path<ConfigId>, PathRejection>,
) -> Result<Json<ConfigurationRecord>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.service.get(&id)?))
}

async fn create_configuration(
    State(state): State<AppState>,
    id: Result<Path<ConfigId>, PathRejection>,
    payload: Result<Json<RecordInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ConfigurationRecord>), ApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let (name, value) = input.validate()?;
    let record = state.service.create(&id, &name, &value)?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn update_configuration(
    State(state): State<AppState>,
    id: Result<Path<ConfigId>, PathRejection>,
    payload: Result<Json<RecordInput>, JsonRejection>,
) -> Result<Json<ConfigurationRecord>, ApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let (name, value) = input.validate()?;
    Ok(Json(state.service.update(&id, &name, &value)?))
}

async fn delete_configuration(
    State(state): State<AppState>,
    id: Result<Path<ConfigId>, PathRejection>,
) -> Result<Json<ConfigurationRecord>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.service.delete(&id)?))
}
