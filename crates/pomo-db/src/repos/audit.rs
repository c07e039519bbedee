//! Audit trail repository.
//!
//! Append-only entries recording every mutation of a pomodoro.

use chrono::Utc;

use pomo_core::entities::AuditEntry;
use pomo_core::enums::{AuditAction, PomodoroStatus};

use crate::PomoDb;
use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, parse_datetime, parse_enum};

const SELECT_COLS: &str = "id, pomodoro_id, action, from_status, to_status, created_at";

fn row_to_audit(row: &libsql::Row) -> Result<AuditEntry, DatabaseError> {
    Ok(AuditEntry {
        id: row.get(0)?,
        pomodoro_id: row.get(1)?,
        action: parse_enum(&row.get::<String>(2)?)?,
        from_status: get_opt_string(row, 3)?
            .map(|s| parse_enum(&s))
            .transpose()?,
        to_status: parse_enum(&row.get::<String>(4)?)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

/// Append one entry. Runs on whichever connection or transaction the caller
/// is writing through.
pub(super) async fn insert_audit(
    conn: &libsql::Connection,
    pomodoro_id: i64,
    action: AuditAction,
    from_status: Option<PomodoroStatus>,
    to_status: PomodoroStatus,
) -> Result<AuditEntry, DatabaseError> {
    let mut rows = conn
        .query(
            &format!(
                "INSERT INTO pomodoro_audit (pomodoro_id, action, from_status, to_status, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 RETURNING {SELECT_COLS}"
            ),
            libsql::params![
                pomodoro_id,
                action.as_str(),
                from_status.map(PomodoroStatus::as_str),
                to_status.as_str(),
                format_datetime(&Utc::now())
            ],
        )
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    row_to_audit(&row)
}

impl PomoDb {
    pub async fn audit_entries(&self, pomodoro_id: i64) -> Result<Vec<AuditEntry>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM pomodoro_audit
                     WHERE pomodoro_id = ?1 ORDER BY id ASC"
                ),
                [pomodoro_id],
            )
            .await?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_audit(&row)?);
        }
        Ok(entries)
    }
}
