use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ModelError;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error returned by handlers, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(entity: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, format!("{entity} not found"))
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.message}))).into_response()
    }
}

/// Storage failures are logged and hidden behind a generic 500.
impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        error!(error = %e, "storage operation failed");
        Self::internal()
    }
}

impl From<ModelError> for JsonApiError {
    fn from(e: ModelError) -> Self {
        Self::bad_request(e.message())
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(e: JsonRejection) -> Self {
        Self::new(e.status(), e.body_text())
    }
}

impl From<MultipartError> for JsonApiError {
    fn from(e: MultipartError) -> Self {
        Self::new(e.status(), e.body_text())
    }
}

impl From<MultipartRejection> for JsonApiError {
    fn from(e: MultipartRejection) -> Self {
        Self::new(e.status(), e.body_text())
    }
}

impl From<std::io::Error> for JsonApiError {
    fn from(e: std::io::Error) -> Self {
        error!(error = %e, "upload write failed");
        Self::internal()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot open record store: {0}")]
    Store(#[from] ServiceError),
}
