//! Error types for pomo-client.

use pomo_db::ServiceError;
use thiserror::Error;

use crate::view::View;

/// Failure of a user intent.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Input rejected before or by the lifecycle engine.
    #[error("{0}")]
    Validation(String),

    #[error("Pomodoro not found")]
    NotFound,

    /// Out-of-order transition rejected by the server.
    #[error("{0}")]
    Conflict(String),

    /// Non-success response that is neither 404 nor 409.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Persistence failure in local mode.
    #[error("Store error: {0}")]
    Store(String),

    #[error(transparent)]
    View(#[from] ViewError),

    #[error(transparent)]
    Timer(#[from] TimerError),
}

impl From<ServiceError> for ClientError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => Self::Validation(msg),
            ServiceError::NotFound { .. } => Self::NotFound,
            e @ ServiceError::InvalidTransition { .. } => Self::Conflict(e.to_string()),
            ServiceError::Store(e) => Self::Store(e.to_string()),
        }
    }
}

/// An intent that the current view does not accept.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("cannot {intent} from the {view} view")]
pub struct ViewError {
    pub view: View,
    pub intent: &'static str,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TimerError {
    #[error("a countdown is already running")]
    AlreadyRunning,

    #[error("countdown length must be at least one second")]
    ZeroDuration,
}
