//! Input rules for new sessions and phase logs.
//!
//! Text fields are trimmed before they are checked and the trimmed value is
//! what gets stored.

use crate::errors::CoreError;

pub const MIN_DURATION_MINUTES: u32 = 1;
pub const MAX_DURATION_MINUTES: u32 = 90;
pub const DEFAULT_DURATION_MINUTES: u32 = 25;

/// Validated input for creating a pomodoro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPomodoro {
    pub goal: String,
    pub reward_plan: String,
    pub duration_minutes: u32,
}

impl NewPomodoro {
    /// Validate raw input.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the trimmed goal or reward plan is
    /// empty, or the duration is outside `[1, 90]`.
    pub fn new(goal: &str, reward_plan: &str, duration_minutes: i64) -> Result<Self, CoreError> {
        Ok(Self {
            goal: require_text("goal", goal)?,
            reward_plan: require_text("rewardPlan", reward_plan)?,
            duration_minutes: check_duration(duration_minutes)?,
        })
    }
}

/// Trim `value` and reject it if nothing is left.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming `field` when the trimmed text is empty.
pub fn require_text(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

/// Check a duration in minutes against `[MIN_DURATION_MINUTES, MAX_DURATION_MINUTES]`.
///
/// # Errors
///
/// Returns `CoreError::Validation` when the value is out of range.
pub fn check_duration(minutes: i64) -> Result<u32, CoreError> {
    u32::try_from(minutes)
        .ok()
        .filter(|m| (MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(m))
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "durationMinutes must be between {MIN_DURATION_MINUTES} and {MAX_DURATION_MINUTES}, got {minutes}"
            ))
        })
}
