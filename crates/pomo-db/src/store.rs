//! The persistence seam of the lifecycle engine.

use std::future::Future;

use pomo_core::entities::{AuditEntry, Pomodoro};
use pomo_core::enums::{AuditAction, PomodoroStatus};
use pomo_core::validation::NewPomodoro;

use crate::error::DatabaseError;
use crate::updates::PomodoroUpdate;

/// Durable storage for pomodoros and their audit trail.
///
/// Every mutation writes its row and its audit entry atomically: either both
/// are stored or neither is. Concurrent writes to the same id are
/// last-write-wins.
pub trait PomodoroStore: Send + Sync + 'static {
    /// Insert a new session with `status = in_progress` and `created_at = now`,
    /// together with its `created` audit entry.
    fn create(
        &self,
        input: &NewPomodoro,
    ) -> impl Future<Output = Result<Pomodoro, DatabaseError>> + Send;

    fn get(&self, id: i64) -> impl Future<Output = Result<Option<Pomodoro>, DatabaseError>> + Send;

    /// Most recently created first, ties broken by id descending.
    fn list(&self, limit: u32)
    -> impl Future<Output = Result<Vec<Pomodoro>, DatabaseError>> + Send;

    /// Apply the `Some` fields of `update` and append an `action` entry
    /// moving from `from_status` to the stored status. `None` when `id` does
    /// not resolve.
    fn transition(
        &self,
        id: i64,
        update: &PomodoroUpdate,
        action: AuditAction,
        from_status: PomodoroStatus,
    ) -> impl Future<Output = Result<Option<Pomodoro>, DatabaseError>> + Send;

    /// Audit entries for one session, oldest first.
    fn audit_for(
        &self,
        pomodoro_id: i64,
    ) -> impl Future<Output = Result<Vec<AuditEntry>, DatabaseError>> + Send;
}
