//! HTTP transport against a running `pomo serve`.

use pomo_core::entities::{AuditEntry, Pomodoro};
use pomo_core::requests::{BreakLogRequest, CreatePomodoroRequest, WorkLogRequest};
use pomo_core::responses::ErrorResponse;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::transport::Transport;

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:3456`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/pomodoros{path}", self.base_url)
    }
}

/// Decode a success body, or turn the `{error}` body into a `ClientError`.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    };
    tracing::debug!(status = status.as_u16(), %message, "request rejected");

    Err(match status {
        StatusCode::NOT_FOUND => ClientError::NotFound,
        StatusCode::CONFLICT => ClientError::Conflict(message),
        _ => ClientError::Server {
            status: status.as_u16(),
            message,
        },
    })
}

impl Transport for HttpTransport {
    async fn create(&self, request: &CreatePomodoroRequest) -> Result<Pomodoro, ClientError> {
        let response = self.client.post(self.url("")).json(request).send().await?;
        decode(response).await
    }

    async fn list(&self, limit: u32) -> Result<Vec<Pomodoro>, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("?limit={limit}")))
            .send()
            .await?;
        decode(response).await
    }

    async fn get(&self, id: i64) -> Result<Pomodoro, ClientError> {
        let response = self.client.get(self.url(&format!("/{id}"))).send().await?;
        decode(response).await
    }

    async fn record_work(&self, id: i64, work_log: &str) -> Result<Pomodoro, ClientError> {
        let body = WorkLogRequest {
            work_log: work_log.to_string(),
        };
        let response = self
            .client
            .patch(self.url(&format!("/{id}/work-log")))
            .json(&body)
            .send()
            .await?;
        decode(response).await
    }

    async fn record_break(&self, id: i64, break_log: &str) -> Result<Pomodoro, ClientError> {
        let body = BreakLogRequest {
            break_log: break_log.to_string(),
        };
        let response = self
            .client
            .patch(self.url(&format!("/{id}/break-log")))
            .json(&body)
            .send()
            .await?;
        decode(response).await
    }

    async fn cancel(&self, id: i64) -> Result<Pomodoro, ClientError> {
        let response = self
            .client
            .patch(self.url(&format!("/{id}/cancel")))
            .send()
            .await?;
        decode(response).await
    }

    async fn audit(&self, id: i64) -> Result<Vec<AuditEntry>, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/{id}/audit")))
            .send()
            .await?;
        decode(response).await
    }
}
