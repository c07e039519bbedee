//! Cross-cutting error types for Pomo.
//!
//! Domain-specific errors (`DatabaseError`, `ApiError`, ...) are defined in
//! their respective crates and convert from `CoreError` where they surface it.

use thiserror::Error;

/// Errors that can be raised by any Pomo crate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Input failed validation (empty text, duration out of range).
    #[error("Validation error: {0}")]
    Validation(String),
}
