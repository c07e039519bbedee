//! Request bodies accepted by the REST surface.
//!
//! Field names are camelCase on the wire. Missing text fields deserialize as
//! empty strings so they fail validation instead of deserialization.

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::validation::NewPomodoro;

/// Body of `POST /api/pomodoros`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePomodoroRequest {
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub reward_plan: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
}

impl CreatePomodoroRequest {
    /// Validate into a `NewPomodoro`, using `default_duration` when no
    /// duration was sent.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if any field is invalid.
    pub fn validate(&self, default_duration: u32) -> Result<NewPomodoro, CoreError> {
        let minutes = self
            .duration_minutes
            .unwrap_or_else(|| i64::from(default_duration));
        NewPomodoro::new(&self.goal, &self.reward_plan, minutes)
    }
}

/// Body of `PATCH /api/pomodoros/:id/work-log`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkLogRequest {
    #[serde(default)]
    pub work_log: String,
}

/// Body of `PATCH /api/pomodoros/:id/break-log`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BreakLogRequest {
    #[serde(default)]
    pub break_log: String,
}
