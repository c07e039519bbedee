//! Pomodoro repository: insert, lookup, history listing and audited transitions.

use chrono::Utc;

use pomo_core::entities::Pomodoro;
use pomo_core::enums::{AuditAction, PomodoroStatus};
use pomo_core::validation::NewPomodoro;

use super::audit::insert_audit;
use crate::error::DatabaseError;
use crate::{PomoDb, finish_write};
use crate::helpers::{format_datetime, get_opt_string, parse_datetime, parse_enum, parse_optional_datetime};
use crate::updates::PomodoroUpdate;

const SELECT_COLS: &str = "id, goal, reward_plan, duration_minutes, work_log, break_log, status, created_at, completed_at";

fn row_to_pomodoro(row: &libsql::Row) -> Result<Pomodoro, DatabaseError> {
    let duration = row.get::<i64>(3)?;
    Ok(Pomodoro {
        id: row.get(0)?,
        goal: row.get(1)?,
        reward_plan: row.get(2)?,
        duration_minutes: u32::try_from(duration).map_err(|_| {
            DatabaseError::InvalidState(format!("duration_minutes out of range: {duration}"))
        })?,
        work_log: get_opt_string(row, 4)?,
        break_log: get_opt_string(row, 5)?,
        status: parse_enum(&row.get::<String>(6)?)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        work_finished_at: parse_optional_datetime(get_opt_string(row, 8)?.as_deref())?,
    })
}

impl PomoDb {
    /// Insert a new session and its `created` audit entry. Neither is
    /// written unless both succeed.
    pub async fn create_pomodoro(&self, input: &NewPomodoro) -> Result<Pomodoro, DatabaseError> {
        let (_guard, tx) = self.begin_write().await?;
        let result = create_with_audit(&tx, input).await;
        finish_write(tx, result).await
    }

    /// Apply `update` and record `action` against the session in one
    /// transaction. `None` when `id` does not resolve; nothing is written.
    pub async fn transition_pomodoro(
        &self,
        id: i64,
        update: &PomodoroUpdate,
        action: AuditAction,
        from_status: PomodoroStatus,
    ) -> Result<Option<Pomodoro>, DatabaseError> {
        let (_guard, tx) = self.begin_write().await?;
        let result = transition_with_audit(&tx, id, update, action, from_status).await;
        finish_write(tx, result).await
    }

    pub async fn get_pomodoro(&self, id: i64) -> Result<Option<Pomodoro>, DatabaseError> {
        select_pomodoro(self.conn(), id).await
    }

    pub async fn list_pomodoros(&self, limit: u32) -> Result<Vec<Pomodoro>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM pomodoros
                     ORDER BY created_at DESC, id DESC LIMIT ?1"
                ),
                [i64::from(limit)],
            )
            .await?;
        let mut pomodoros = Vec::new();
        while let Some(row) = rows.next().await? {
            pomodoros.push(row_to_pomodoro(&row)?);
        }
        Ok(pomodoros)
    }
}

async fn create_with_audit(
    conn: &libsql::Connection,
    input: &NewPomodoro,
) -> Result<Pomodoro, DatabaseError> {
    let created = insert_pomodoro(conn, input).await?;
    insert_audit(conn, created.id, AuditAction::Created, None, created.status).await?;
    Ok(created)
}

async fn transition_with_audit(
    conn: &libsql::Connection,
    id: i64,
    update: &PomodoroUpdate,
    action: AuditAction,
    from_status: PomodoroStatus,
) -> Result<Option<Pomodoro>, DatabaseError> {
    let Some(updated) = update_pomodoro(conn, id, update).await? else {
        return Ok(None);
    };
    insert_audit(conn, updated.id, action, Some(from_status), updated.status).await?;
    Ok(Some(updated))
}

async fn insert_pomodoro(
    conn: &libsql::Connection,
    input: &NewPomodoro,
) -> Result<Pomodoro, DatabaseError> {
    let mut rows = conn
        .query(
            &format!(
                "INSERT INTO pomodoros (goal, reward_plan, duration_minutes, status, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 RETURNING {SELECT_COLS}"
            ),
            libsql::params![
                input.goal.as_str(),
                input.reward_plan.as_str(),
                i64::from(input.duration_minutes),
                PomodoroStatus::InProgress.as_str(),
                format_datetime(&Utc::now())
            ],
        )
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    row_to_pomodoro(&row)
}

async fn select_pomodoro(
    conn: &libsql::Connection,
    id: i64,
) -> Result<Option<Pomodoro>, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {SELECT_COLS} FROM pomodoros WHERE id = ?1"),
            [id],
        )
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_pomodoro(&row)?)),
        None => Ok(None),
    }
}

/// Apply the `Some` fields of `update`. `None` when `id` does not resolve.
async fn update_pomodoro(
    conn: &libsql::Connection,
    id: i64,
    update: &PomodoroUpdate,
) -> Result<Option<Pomodoro>, DatabaseError> {
    if update.is_empty() {
        return select_pomodoro(conn, id).await;
    }

    let mut sets = Vec::new();
    let mut params: Vec<libsql::Value> = Vec::new();
    let mut idx = 1usize;

    if let Some(ref work_log) = update.work_log {
        sets.push(format!("work_log = ?{idx}"));
        params.push(work_log.clone().into());
        idx += 1;
    }
    if let Some(ref break_log) = update.break_log {
        sets.push(format!("break_log = ?{idx}"));
        params.push(break_log.clone().into());
        idx += 1;
    }
    if let Some(status) = update.status {
        sets.push(format!("status = ?{idx}"));
        params.push(status.as_str().into());
        idx += 1;
    }
    if let Some(ref at) = update.work_finished_at {
        sets.push(format!("completed_at = ?{idx}"));
        params.push(format_datetime(at).into());
        idx += 1;
    }

    let sql = format!(
        "UPDATE pomodoros SET {} WHERE id = ?{idx} RETURNING {SELECT_COLS}",
        sets.join(", ")
    );
    params.push(id.into());

    let mut rows = conn.query(&sql, libsql::params_from_iter(params)).await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_pomodoro(&row)?)),
        None => Ok(None),
    }
}
