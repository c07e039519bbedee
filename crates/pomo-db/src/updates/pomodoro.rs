//! Pomodoro update builder.

use chrono::{DateTime, Utc};
use pomo_core::enums::PomodoroStatus;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PomodoroUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_log: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_log: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PomodoroStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_finished_at: Option<DateTime<Utc>>,
}

impl PomodoroUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.work_log.is_none()
            && self.break_log.is_none()
            && self.status.is_none()
            && self.work_finished_at.is_none()
    }
}

#[derive(Debug, Default)]
pub struct PomodoroUpdateBuilder(PomodoroUpdate);

impl PomodoroUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(PomodoroUpdate::default())
    }

    #[must_use]
    pub fn work_log(mut self, work_log: impl Into<String>) -> Self {
        self.0.work_log = Some(work_log.into());
        self
    }

    #[must_use]
    pub fn break_log(mut self, break_log: impl Into<String>) -> Self {
        self.0.break_log = Some(break_log.into());
        self
    }

    #[must_use]
    pub const fn status(mut self, status: PomodoroStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub const fn work_finished_at(mut self, at: DateTime<Utc>) -> Self {
        self.0.work_finished_at = Some(at);
        self
    }

    #[must_use]
    pub fn build(self) -> PomodoroUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_only_requested_fields() {
        let update = PomodoroUpdateBuilder::new()
            .break_log("Walked")
            .status(PomodoroStatus::Completed)
            .build();
        assert_eq!(update.break_log.as_deref(), Some("Walked"));
        assert_eq!(update.status, Some(PomodoroStatus::Completed));
        assert!(update.work_log.is_none());
        assert!(update.work_finished_at.is_none());

        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"break_log": "Walked", "status": "completed"})
        );
    }

    #[test]
    fn empty_builder_is_empty() {
        assert!(PomodoroUpdateBuilder::new().build().is_empty());
    }
}
