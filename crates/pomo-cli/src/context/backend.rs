use pomo_client::{ClientError, HttpTransport, Transport};
use pomo_core::entities::{AuditEntry, Pomodoro};
use pomo_core::requests::CreatePomodoroRequest;
use pomo_db::PomoService;

/// Where lifecycle calls go: a running API, or the database file itself.
pub enum Backend {
    Http(HttpTransport),
    Local(PomoService),
}

impl Backend {
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Http(_) => "http",
            Self::Local(_) => "local",
        }
    }
}

impl Transport for Backend {
    async fn create(&self, request: &CreatePomodoroRequest) -> Result<Pomodoro, ClientError> {
        match self {
            Self::Http(http) => http.create(request).await,
            Self::Local(service) => Transport::create(service, request).await,
        }
    }

    async fn list(&self, limit: u32) -> Result<Vec<Pomodoro>, ClientError> {
        match self {
            Self::Http(http) => http.list(limit).await,
            Self::Local(service) => Transport::list(service, limit).await,
        }
    }

    async fn get(&self, id: i64) -> Result<Pomodoro, ClientError> {
        match self {
            Self::Http(http) => http.get(id).await,
            Self::Local(service) => Transport::get(service, id).await,
        }
    }

    async fn record_work(&self, id: i64, work_log: &str) -> Result<Pomodoro, ClientError> {
        match self {
            Self::Http(http) => http.record_work(id, work_log).await,
            Self::Local(service) => Transport::record_work(service, id, work_log).await,
        }
    }

    async fn record_break(&self, id: i64, break_log: &str) -> Result<Pomodoro, ClientError> {
        match self {
            Self::Http(http) => http.record_break(id, break_log).await,
            Self::Local(service) => Transport::record_break(service, id, break_log).await,
        }
    }

    async fn cancel(&self, id: i64) -> Result<Pomodoro, ClientError> {
        match self {
            Self::Http(http) => http.cancel(id).await,
            Self::Local(service) => Transport::cancel(service, id).await,
        }
    }

    async fn audit(&self, id: i64) -> Result<Vec<AuditEntry>, ClientError> {
        match self {
            Self::Http(http) => http.audit(id).await,
            Self::Local(service) => Transport::audit(service, id).await,
        }
    }
}
