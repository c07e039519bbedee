//! In-process transport: the client drives the lifecycle engine directly.

use pomo_core::entities::{AuditEntry, Pomodoro};
use pomo_core::requests::CreatePomodoroRequest;
use pomo_db::{PomoService, PomodoroStore};

use crate::error::ClientError;
use crate::transport::Transport;

impl<S: PomodoroStore> Transport for PomoService<S> {
    async fn create(&self, request: &CreatePomodoroRequest) -> Result<Pomodoro, ClientError> {
        Ok(self.start(request).await?)
    }

    async fn list(&self, limit: u32) -> Result<Vec<Pomodoro>, ClientError> {
        Ok(Self::list(self, limit).await?)
    }

    async fn get(&self, id: i64) -> Result<Pomodoro, ClientError> {
        Ok(Self::get(self, id).await?)
    }

    async fn record_work(&self, id: i64, work_log: &str) -> Result<Pomodoro, ClientError> {
        Ok(Self::record_work(self, id, work_log).await?)
    }

    async fn record_break(&self, id: i64, break_log: &str) -> Result<Pomodoro, ClientError> {
        Ok(Self::record_break(self, id, break_log).await?)
    }

    async fn cancel(&self, id: i64) -> Result<Pomodoro, ClientError> {
        Ok(Self::cancel(self, id).await?)
    }

    async fn audit(&self, id: i64) -> Result<Vec<AuditEntry>, ClientError> {
        Ok(Self::audit(self, id).await?)
    }
}
