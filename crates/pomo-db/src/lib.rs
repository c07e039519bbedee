//! # pomo-db
//!
//! Durable session store and lifecycle engine for Pomo.
//!
//! `PomoDb` persists pomodoros and their audit trail in a local libSQL
//! database and implements [`store::PomodoroStore`]. [`service::PomoService`]
//! is the lifecycle engine: it validates input, enforces the transition
//! policy, and records an audit entry for every successful mutation.

pub mod error;
pub mod helpers;
mod migrations;
mod repos;
pub mod service;
pub mod store;
pub mod updates;

#[cfg(test)]
mod test_support;

pub use error::{DatabaseError, ServiceError};
pub use service::PomoService;
pub use store::PomodoroStore;

use libsql::Builder;
use tokio::sync::{Mutex, MutexGuard};

/// Database handle for Pomo session state.
pub struct PomoDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    /// Serializes write transactions on the shared connection.
    write_lock: Mutex<()>,
}

impl PomoDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let pomo_db = Self {
            db,
            conn,
            write_lock: Mutex::new(()),
        };
        pomo_db.run_migrations().await?;
        tracing::debug!(path, "opened session store");
        Ok(pomo_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Open a write transaction. The guard must outlive the transaction.
    async fn begin_write(
        &self,
    ) -> Result<(MutexGuard<'_, ()>, libsql::Transaction), DatabaseError> {
        let guard = self.write_lock.lock().await;
        let tx = self.conn.transaction().await?;
        Ok((guard, tx))
    }
}

/// Commit `tx` if every statement in it succeeded, roll it back otherwise.
async fn finish_write<T>(
    tx: libsql::Transaction,
    result: Result<T, DatabaseError>,
) -> Result<T, DatabaseError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(error) => {
            if let Err(rollback) = tx.rollback().await {
                tracing::warn!(%rollback, "rollback failed");
            }
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_db;

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in ["pomodoros", "pomodoro_audit"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        // Run migrations again; must not fail
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn status_check_constraint_rejects_unknown_values() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO pomodoros (goal, reward_plan, duration_minutes, status, created_at)
                 VALUES ('g', 'r', 25, 'paused', '2026-01-01T00:00:00Z')",
                (),
            )
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn data_survives_reopen_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pomo.db");
        let path = path.to_str().unwrap();

        let id = {
            let db = PomoDb::open_local(path).await.unwrap();
            let input = pomo_core::validation::NewPomodoro::new("Persist", "Nap", 5).unwrap();
            db.create_pomodoro(&input).await.unwrap().id
        };

        let reopened = PomoDb::open_local(path).await.unwrap();
        let fetched = reopened.get_pomodoro(id).await.unwrap().unwrap();
        assert_eq!(fetched.goal, "Persist");
        assert_eq!(fetched.duration_minutes, 5);
    }
}
