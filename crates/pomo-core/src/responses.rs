//! Response bodies returned by the REST surface besides the entities
//! themselves.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Message shown to the user when a pomodoro id does not resolve.
pub const NOT_FOUND_MESSAGE: &str = "Pomodoro not found";

/// `{ "error": "..." }` body of every failed request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
