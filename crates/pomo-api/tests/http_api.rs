//! Real HTTP round-trips against the router bound to an ephemeral port.

use std::sync::Arc;

use pomo_core::entities::{AuditEntry, Pomodoro};
use pomo_core::enums::{AuditAction, PomodoroStatus, TransitionPolicy};
use pomo_core::responses::ErrorResponse;
use pomo_db::PomoService;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

struct TestServer {
    base: String,
    client: reqwest::Client,
}

impl TestServer {
    async fn start(policy: TransitionPolicy) -> Self {
        let service = PomoService::open_local(":memory:", policy, 25).await.unwrap();
        let app = pomo_api::router(Arc::new(service), 20);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(pomo_api::serve(listener, app, std::future::pending()));
        Self {
            base: format!("http://{addr}/api/pomodoros"),
            client: reqwest::Client::new(),
        }
    }

    async fn create(&self, body: Value) -> reqwest::Response {
        self.client.post(&self.base).json(&body).send().await.unwrap()
    }

    async fn patch(&self, path: &str, body: Option<Value>) -> reqwest::Response {
        let req = self.client.patch(format!("{}/{path}", self.base));
        let req = match body {
            Some(body) => req.json(&body),
            None => req,
        };
        req.send().await.unwrap()
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        let url = if path.is_empty() {
            self.base.clone()
        } else {
            format!("{}{path}", self.base)
        };
        self.client.get(url).send().await.unwrap()
    }

    async fn start_session(&self, goal: &str) -> Pomodoro {
        let res = self
            .create(json!({"goal": goal, "rewardPlan": "Coffee", "durationMinutes": 25}))
            .await;
        assert_eq!(res.status().as_u16(), 201);
        res.json().await.unwrap()
    }
}

#[tokio::test]
async fn create_returns_201_with_snake_case_session() {
    let server = TestServer::start(TransitionPolicy::Strict).await;
    let res = server
        .create(json!({"goal": " Write report ", "rewardPlan": "Coffee", "durationMinutes": 25}))
        .await;
    assert_eq!(res.status().as_u16(), 201);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["goal"], "Write report");
    assert_eq!(body["reward_plan"], "Coffee");
    assert_eq!(body["duration_minutes"], 25);
    assert_eq!(body["status"], "in_progress");
    assert!(body["work_log"].is_null());
    assert!(body["break_log"].is_null());
    assert!(body["completed_at"].is_null());
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn create_without_duration_defaults_to_25() {
    let server = TestServer::start(TransitionPolicy::Strict).await;
    let res = server.create(json!({"goal": "Read", "rewardPlan": "Walk"})).await;
    let p: Pomodoro = res.json().await.unwrap();
    assert_eq!(p.duration_minutes, 25);
}

#[tokio::test]
async fn invalid_create_is_500_with_error_body() {
    let server = TestServer::start(TransitionPolicy::Strict).await;

    let res = server
        .create(json!({"goal": "   ", "rewardPlan": "Coffee", "durationMinutes": 25}))
        .await;
    assert_eq!(res.status().as_u16(), 500);
    let err: ErrorResponse = res.json().await.unwrap();
    assert_eq!(err.error, "goal must not be empty");

    let res = server
        .create(json!({"goal": "Write", "rewardPlan": "Coffee", "durationMinutes": 0}))
        .await;
    assert_eq!(res.status().as_u16(), 500);

    let list: Vec<Pomodoro> = server.get("").await.json().await.unwrap();
    assert!(list.is_empty());
}

#[tokio::test]
async fn malformed_json_is_500_with_error_body() {
    let server = TestServer::start(TransitionPolicy::Strict).await;
    let res = server
        .client
        .post(&server.base)
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 500);
    let err: ErrorResponse = res.json().await.unwrap();
    assert!(!err.error.is_empty());
}

#[tokio::test]
async fn full_cycle_over_http() {
    let server = TestServer::start(TransitionPolicy::Strict).await;
    let p = server.start_session("Write report").await;

    let res = server
        .patch(&format!("{}/work-log", p.id), Some(json!({"workLog": "Drafted intro"})))
        .await;
    assert_eq!(res.status().as_u16(), 200);
    let worked: Value = res.json().await.unwrap();
    assert_eq!(worked["status"], "work_done");
    assert_eq!(worked["work_log"], "Drafted intro");
    assert!(worked["completed_at"].is_string());

    let res = server
        .patch(&format!("{}/break-log", p.id), Some(json!({"breakLog": "Walked"})))
        .await;
    assert_eq!(res.status().as_u16(), 200);
    let done: Pomodoro = res.json().await.unwrap();
    assert_eq!(done.status, PomodoroStatus::Completed);

    let fetched: Pomodoro = server.get(&format!("/{}", p.id)).await.json().await.unwrap();
    assert_eq!(fetched, done);

    let audit: Vec<AuditEntry> = server
        .get(&format!("/{}/audit", p.id))
        .await
        .json()
        .await
        .unwrap();
    let actions: Vec<_> = audit.iter().map(|e| e.action).collect();
    assert_eq!(
        actions,
        vec![
            AuditAction::Created,
            AuditAction::WorkLogged,
            AuditAction::BreakLogged
        ]
    );
}

#[tokio::test]
async fn unknown_and_non_numeric_ids_are_404() {
    let server = TestServer::start(TransitionPolicy::Strict).await;

    for path in ["/999", "/abc", "/999/audit"] {
        let res = server.get(path).await;
        assert_eq!(res.status().as_u16(), 404, "GET {path}");
        let err: ErrorResponse = res.json().await.unwrap();
        assert_eq!(err.error, "Pomodoro not found");
    }

    let res = server
        .patch("999/work-log", Some(json!({"workLog": "x"})))
        .await;
    assert_eq!(res.status().as_u16(), 404);
    let res = server.patch("999/cancel", None).await;
    assert_eq!(res.status().as_u16(), 404);
}

#[tokio::test]
async fn strict_out_of_order_transition_is_409() {
    let server = TestServer::start(TransitionPolicy::Strict).await;
    let p = server.start_session("Write").await;

    let res = server
        .patch(&format!("{}/break-log", p.id), Some(json!({"breakLog": "early"})))
        .await;
    assert_eq!(res.status().as_u16(), 409);
    let err: ErrorResponse = res.json().await.unwrap();
    assert!(err.error.contains("in_progress"));
}

#[tokio::test]
async fn permissive_accepts_out_of_order_transition() {
    let server = TestServer::start(TransitionPolicy::Permissive).await;
    let p = server.start_session("Write").await;

    let res = server
        .patch(&format!("{}/break-log", p.id), Some(json!({"breakLog": "early"})))
        .await;
    assert_eq!(res.status().as_u16(), 200);
}

#[tokio::test]
async fn cancel_twice_returns_the_same_session() {
    let server = TestServer::start(TransitionPolicy::Strict).await;
    let p = server.start_session("Write").await;

    let first: Pomodoro = server
        .patch(&format!("{}/cancel", p.id), None)
        .await
        .json()
        .await
        .unwrap();
    let second: Pomodoro = server
        .patch(&format!("{}/cancel", p.id), None)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(first.status, PomodoroStatus::Cancelled);
    assert_eq!(first, second);
}

#[tokio::test]
async fn empty_work_log_is_500() {
    let server = TestServer::start(TransitionPolicy::Strict).await;
    let p = server.start_session("Write").await;

    let res = server
        .patch(&format!("{}/work-log", p.id), Some(json!({"workLog": "  "})))
        .await;
    assert_eq!(res.status().as_u16(), 500);
    let err: ErrorResponse = res.json().await.unwrap();
    assert_eq!(err.error, "workLog must not be empty");
}

#[tokio::test]
async fn list_honours_limit_and_falls_back() {
    let server = TestServer::start(TransitionPolicy::Strict).await;
    for goal in ["one", "two", "three"] {
        server.start_session(goal).await;
    }

    let two: Vec<Pomodoro> = server.get("?limit=2").await.json().await.unwrap();
    assert_eq!(two.len(), 2);
    assert_eq!(two[0].goal, "three");
    assert_eq!(two[1].goal, "two");

    let fallback: Vec<Pomodoro> = server.get("?limit=abc").await.json().await.unwrap();
    assert_eq!(fallback.len(), 3);

    let prefixed: Vec<Pomodoro> = server.get("?limit=1abc").await.json().await.unwrap();
    assert_eq!(prefixed.len(), 1);
    let fractional: Vec<Pomodoro> = server.get("?limit=2.9").await.json().await.unwrap();
    assert_eq!(fractional.len(), 2);
}
