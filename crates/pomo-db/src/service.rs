//! Session lifecycle engine.
//!
//! `PomoService` wraps a [`PomodoroStore`] and owns every rule about how a
//! pomodoro moves through its states:
//!
//! ```text
//! in_progress → work_done → completed
//!             → cancelled
//! work_done   → cancelled
//! ```
//!
//! Every mutation follows the same protocol:
//! 1. Validate and trim the input
//! 2. Resolve the session (`NotFound` otherwise)
//! 3. Check the transition against the policy
//! 4. Apply the partial update and append an audit entry in one transaction

use chrono::Utc;

use pomo_core::entities::{AuditEntry, Pomodoro};
use pomo_core::enums::{AuditAction, PomodoroStatus, TransitionPolicy};
use pomo_core::requests::CreatePomodoroRequest;
use pomo_core::validation::require_text;

use crate::PomoDb;
use crate::error::{DatabaseError, ServiceError};
use crate::store::PomodoroStore;
use crate::updates::{PomodoroUpdate, PomodoroUpdateBuilder};

pub struct PomoService<S = PomoDb> {
    store: S,
    policy: TransitionPolicy,
    default_duration: u32,
}

impl PomoService<PomoDb> {
    /// Open a local database and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn open_local(
        path: &str,
        policy: TransitionPolicy,
        default_duration: u32,
    ) -> Result<Self, DatabaseError> {
        let db = PomoDb::open_local(path).await?;
        Ok(Self::new(db, policy, default_duration))
    }
}

impl<S: PomodoroStore> PomoService<S> {
    #[must_use]
    pub const fn new(store: S, policy: TransitionPolicy, default_duration: u32) -> Self {
        Self {
            store,
            policy,
            default_duration,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    /// Duration used when a create request omits `durationMinutes`.
    #[must_use]
    pub const fn default_duration(&self) -> u32 {
        self.default_duration
    }

    /// Create an `in_progress` session.
    ///
    /// # Errors
    ///
    /// `Validation` if goal or reward plan is blank or the duration is outside
    /// `[1, 90]`; nothing is created in that case.
    pub async fn start(&self, request: &CreatePomodoroRequest) -> Result<Pomodoro, ServiceError> {
        let input = request.validate(self.default_duration)?;
        let created = self.store.create(&input).await?;
        tracing::debug!(
            id = created.id,
            duration_minutes = created.duration_minutes,
            "pomodoro started"
        );
        Ok(created)
    }

    /// Record what was done during the work phase and move to `work_done`.
    ///
    /// # Errors
    ///
    /// `Validation` for a blank log, `NotFound` for an unknown id,
    /// `InvalidTransition` under the strict policy unless `in_progress`.
    pub async fn record_work(&self, id: i64, work_log: &str) -> Result<Pomodoro, ServiceError> {
        let work_log = require_text("workLog", work_log)?;
        let current = self.require(id).await?;
        self.check_transition(&current, PomodoroStatus::WorkDone)?;

        let update = PomodoroUpdateBuilder::new()
            .work_log(work_log)
            .status(PomodoroStatus::WorkDone)
            .work_finished_at(Utc::now())
            .build();
        self.apply(&current, &update, AuditAction::WorkLogged).await
    }

    /// Record how the break went and move to `completed`.
    ///
    /// # Errors
    ///
    /// `Validation` for a blank log, `NotFound` for an unknown id,
    /// `InvalidTransition` under the strict policy unless `work_done`.
    pub async fn record_break(&self, id: i64, break_log: &str) -> Result<Pomodoro, ServiceError> {
        let break_log = require_text("breakLog", break_log)?;
        let current = self.require(id).await?;
        self.check_transition(&current, PomodoroStatus::Completed)?;

        let update = PomodoroUpdateBuilder::new()
            .break_log(break_log)
            .status(PomodoroStatus::Completed)
            .build();
        self.apply(&current, &update, AuditAction::BreakLogged).await
    }

    /// Abandon a session. Cancelling an already cancelled session returns it
    /// unchanged without writing.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `InvalidTransition` under the strict
    /// policy for a `completed` session.
    pub async fn cancel(&self, id: i64) -> Result<Pomodoro, ServiceError> {
        let current = self.require(id).await?;
        if current.status == PomodoroStatus::Cancelled {
            return Ok(current);
        }
        self.check_transition(&current, PomodoroStatus::Cancelled)?;

        let update = PomodoroUpdateBuilder::new()
            .status(PomodoroStatus::Cancelled)
            .build();
        self.apply(&current, &update, AuditAction::Cancelled).await
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown id.
    pub async fn get(&self, id: i64) -> Result<Pomodoro, ServiceError> {
        self.require(id).await
    }

    /// Most recent sessions first, at most `limit`.
    ///
    /// # Errors
    ///
    /// `Store` if the query fails.
    pub async fn list(&self, limit: u32) -> Result<Vec<Pomodoro>, ServiceError> {
        Ok(self.store.list(limit).await?)
    }

    /// Audit trail of one session, oldest first.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id.
    pub async fn audit(&self, id: i64) -> Result<Vec<AuditEntry>, ServiceError> {
        self.require(id).await?;
        Ok(self.store.audit_for(id).await?)
    }

    async fn require(&self, id: i64) -> Result<Pomodoro, ServiceError> {
        self.store
            .get(id)
            .await?
            .ok_or(ServiceError::NotFound { id })
    }

    fn check_transition(&self, current: &Pomodoro, to: PomodoroStatus) -> Result<(), ServiceError> {
        if self.policy == TransitionPolicy::Strict && !current.status.can_transition_to(to) {
            return Err(ServiceError::InvalidTransition {
                id: current.id,
                from: current.status,
                to,
            });
        }
        Ok(())
    }

    async fn apply(
        &self,
        current: &Pomodoro,
        update: &PomodoroUpdate,
        action: AuditAction,
    ) -> Result<Pomodoro, ServiceError> {
        let updated = self
            .store
            .transition(current.id, update, action, current.status)
            .await?
            .ok_or(ServiceError::NotFound { id: current.id })?;
        tracing::debug!(
            id = updated.id,
            from = %current.status,
            to = %updated.status,
            %action,
            "pomodoro transition"
        );
        Ok(updated)
    }
}
