//! Error types for the recipe API
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == Api Error Enum ==
/// Unified error type for the recipe API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No recipe matches the given id
    #[error("Recipe {0} not found")]
    NotFound(String),

    /// Path id is not a valid storage identifier
    #[error("Invalid recipe id: {0}")]
    MalformedId(String),

    /// Request body failed a presence or type check
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Request body is not valid JSON
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// Any other body rejection, keeping the extractor's status
    #[error("{1}")]
    Rejected(StatusCode, String),

    /// Storage engine failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<mongodb::error::Error> for ApiError {
    fn from(err: mongodb::error::Error) -> Self {
        ApiError::Storage(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => ApiError::Validation(err.body_text()),
            JsonRejection::JsonSyntaxError(err) => ApiError::MalformedBody(err.body_text()),
            other => ApiError::Rejected(other.status(), other.body_text()),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MalformedId(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Rejected(status, _) => *status,
            ApiError::Storage(msg) => {
                error!("Storage operation failed: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the recipe API.
pub type Result<T> = std::result::Result<T, ApiError>;
