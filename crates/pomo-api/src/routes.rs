use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use pomo_core::entities::{AuditEntry, Pomodoro};
use pomo_core::requests::{BreakLogRequest, CreatePomodoroRequest, WorkLogRequest};
use pomo_db::{PomoService, PomodoroStore};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::ApiState;

/// Build the `/api/pomodoros` router.
///
/// `default_limit` applies to history listings whose `limit` is missing,
/// non-numeric or not positive.
pub fn router<S: PomodoroStore>(service: Arc<PomoService<S>>, default_limit: u32) -> Router {
    let state = ApiState {
        service,
        default_limit,
    };

    Router::new()
        .route(
            "/api/pomodoros",
            get(list_pomodoros::<S>).post(create_pomodoro::<S>),
        )
        .route("/api/pomodoros/{id}", get(get_pomodoro::<S>))
        .route("/api/pomodoros/{id}/work-log", patch(record_work::<S>))
        .route("/api/pomodoros/{id}/break-log", patch(record_break::<S>))
        .route("/api/pomodoros/{id}/cancel", patch(cancel_pomodoro::<S>))
        .route("/api/pomodoros/{id}/audit", get(audit_pomodoro::<S>))
        .with_state(state)
}

/// Ids that do not parse are reported exactly like unknown ids.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

// ── Collection ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ListParams {
    limit: Option<String>,
}

impl ListParams {
    fn effective_limit(&self, default: u32) -> u32 {
        self.limit
            .as_deref()
            .and_then(leading_integer)
            .filter(|n| *n > 0)
            .unwrap_or(default)
    }
}

/// The integer `raw` starts with, ignoring anything after it: `"5abc"` and
/// `"10.5"` read as 5 and 10. Negative values read as `None`, values past
/// `u32::MAX` saturate.
fn leading_integer(raw: &str) -> Option<u32> {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if negative || digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}

async fn list_pomodoros<S: PomodoroStore>(
    State(state): State<ApiState<S>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Pomodoro>>, ApiError> {
    let limit = params.effective_limit(state.default_limit);
    Ok(Json(state.service.list(limit).await?))
}

async fn create_pomodoro<S: PomodoroStore>(
    State(state): State<ApiState<S>>,
    body: Result<Json<CreatePomodoroRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Pomodoro>), ApiError> {
    let Json(request) = body?;
    let created = state.service.start(&request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

// ── Single session ─────────────────────────────────────────────────

async fn get_pomodoro<S: PomodoroStore>(
    State(state): State<ApiState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Pomodoro>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.service.get(id).await?))
}

async fn record_work<S: PomodoroStore>(
    State(state): State<ApiState<S>>,
    Path(id): Path<String>,
    body: Result<Json<WorkLogRequest>, JsonRejection>,
) -> Result<Json<Pomodoro>, ApiError> {
    let id = parse_id(&id)?;
    let Json(request) = body?;
    Ok(Json(state.service.record_work(id, &request.work_log).await?))
}

async fn record_break<S: PomodoroStore>(
    State(state): State<ApiState<S>>,
    Path(id): Path<String>,
    body: Result<Json<BreakLogRequest>, JsonRejection>,
) -> Result<Json<Pomodoro>, ApiError> {
    let id = parse_id(&id)?;
    let Json(request) = body?;
    Ok(Json(state.service.record_break(id, &request.break_log).await?))
}

async fn cancel_pomodoro<S: PomodoroStore>(
    State(state): State<ApiState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Pomodoro>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.service.cancel(id).await?))
}

async fn audit_pomodoro<S: PomodoroStore>(
    State(state): State<ApiState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<AuditEntry>>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.service.audit(id).await?))
}
