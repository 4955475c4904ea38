//! Error types for bankease-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bankease_core::{CoreError, ErrorDetails};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The action is not allowed from the current screen
    #[error("Conflict: {}", .details.message)]
    Conflict { details: ErrorDetails },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Navigation(_) => ApiError::Conflict {
                details: err.to_details(),
            },
            CoreError::InvalidValue { .. } => ApiError::BadRequest {
                message: err.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Conflict { details } => serde_json::to_value(details).unwrap_or_default(),
            other => serde_json::json!({
                "error": status.canonical_reason().unwrap_or("Error"),
                "message": other.to_string(),
            }),
        };
        log::warn!("{}", self);
        (status, Json(body)).into_response()
    }
}
