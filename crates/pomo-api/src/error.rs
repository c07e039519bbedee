//! Error type for the REST handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pomo_core::responses::ErrorResponse;
use pomo_db::ServiceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected input, including bodies that are not valid JSON.
    #[error("{0}")]
    Validation(String),

    /// Unknown or non-numeric session id.
    #[error("Pomodoro not found")]
    NotFound,

    /// Out-of-order transition under the strict policy.
    #[error("{0}")]
    Conflict(String),

    /// Persistence failure.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    ///
    /// - Validation: 500
    /// - NotFound: 404
    /// - Conflict: 409
    /// - Internal: 500
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Validation(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => Self::Validation(msg),
            ServiceError::NotFound { .. } => Self::NotFound,
            e @ ServiceError::InvalidTransition { .. } => Self::Conflict(e.to_string()),
            ServiceError::Store(e) => Self::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(ref msg) = self {
            tracing::error!(error = %msg, "pomodoro store failure");
        }
        (self.status_code(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
