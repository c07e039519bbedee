//! Error types for pomo-db: raw store failures and lifecycle engine outcomes.

use pomo_core::enums::PomodoroStatus;
use pomo_core::errors::CoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

/// Outcome of a rejected lifecycle operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Bad input. Nothing was written.
    #[error("{0}")]
    Validation(String),

    #[error("Pomodoro not found: {id}")]
    NotFound { id: i64 },

    /// Rejected by the strict transition policy. Nothing was written.
    #[error("Cannot move pomodoro {id} from {from} to {to}")]
    InvalidTransition {
        id: i64,
        from: PomodoroStatus,
        to: PomodoroStatus,
    },

    #[error(transparent)]
    Store(#[from] DatabaseError),
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        let CoreError::Validation(msg) = err;
        Self::Validation(msg)
    }
}
