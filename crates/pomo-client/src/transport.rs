use std::future::Future;

use pomo_core::entities::{AuditEntry, Pomodoro};
use pomo_core::requests::CreatePomodoroRequest;

use crate::error::ClientError;

/// Operations the client issues against the session lifecycle.
///
/// Implemented over HTTP by [`crate::HttpTransport`] and in-process by
/// [`pomo_db::PomoService`].
pub trait Transport: Send + Sync {
    fn create(
        &self,
        request: &CreatePomodoroRequest,
    ) -> impl Future<Output = Result<Pomodoro, ClientError>> + Send;

    fn list(&self, limit: u32) -> impl Future<Output = Result<Vec<Pomodoro>, ClientError>> + Send;

    fn get(&self, id: i64) -> impl Future<Output = Result<Pomodoro, ClientError>> + Send;

    fn record_work(
        &self,
        id: i64,
        work_log: &str,
    ) -> impl Future<Output = Result<Pomodoro, ClientError>> + Send;

    fn record_break(
        &self,
        id: i64,
        break_log: &str,
    ) -> impl Future<Output = Result<Pomodoro, ClientError>> + Send;

    fn cancel(&self, id: i64) -> impl Future<Output = Result<Pomodoro, ClientError>> + Send;

    fn audit(&self, id: i64) -> impl Future<Output = Result<Vec<AuditEntry>, ClientError>> + Send;
}
