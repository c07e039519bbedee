use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AuditAction, PomodoroStatus};

/// One recorded mutation of a pomodoro. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditEntry {
    pub id: i64,
    pub pomodoro_id: i64,
    pub action: AuditAction,
    /// `None` for the creation entry.
    pub from_status: Option<PomodoroStatus>,
    pub to_status: PomodoroStatus,
    pub created_at: DateTime<Utc>,
}
