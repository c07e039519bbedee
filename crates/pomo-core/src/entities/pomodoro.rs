use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::PomodoroStatus;

/// One timed work-then-break cycle with a goal and a reward.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Pomodoro {
    pub id: i64,
    pub goal: String,
    pub reward_plan: String,
    pub duration_minutes: u32,
    pub work_log: Option<String>,
    pub break_log: Option<String>,
    pub status: PomodoroStatus,
    pub created_at: DateTime<Utc>,
    /// Set once, when the work log is recorded. It marks the end of the work
    /// phase, not of the whole session; the wire name is kept as `completed_at`.
    #[serde(rename = "completed_at")]
    pub work_finished_at: Option<DateTime<Utc>>,
}

impl Pomodoro {
    /// Length of the work phase in seconds.
    #[must_use]
    pub const fn duration_seconds(&self) -> u64 {
        self.duration_minutes as u64 * 60
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
