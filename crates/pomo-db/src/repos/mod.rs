//! `PomodoroStore` implementation for `PomoDb`, split per table.

mod audit;
mod pomodoro;

use pomo_core::entities::{AuditEntry, Pomodoro};
use pomo_core::enums::{AuditAction, PomodoroStatus};
use pomo_core::validation::NewPomodoro;

use crate::PomoDb;
use crate::error::DatabaseError;
use crate::store::PomodoroStore;
use crate::updates::PomodoroUpdate;

impl PomodoroStore for PomoDb {
    async fn create(&self, input: &NewPomodoro) -> Result<Pomodoro, DatabaseError> {
        self.create_pomodoro(input).await
    }

    async fn get(&self, id: i64) -> Result<Option<Pomodoro>, DatabaseError> {
        self.get_pomodoro(id).await
    }

    async fn list(&self, limit: u32) -> Result<Vec<Pomodoro>, DatabaseError> {
        self.list_pomodoros(limit).await
    }

    async fn transition(
        &self,
        id: i64,
        update: &PomodoroUpdate,
        action: AuditAction,
        from_status: PomodoroStatus,
    ) -> Result<Option<Pomodoro>, DatabaseError> {
        self.transition_pomodoro(id, update, action, from_status)
            .await
    }

    async fn audit_for(&self, pomodoro_id: i64) -> Result<Vec<AuditEntry>, DatabaseError> {
        self.audit_entries(pomodoro_id).await
    }
}
