//! Wire-shape tests: serialized entities must match their schemars schema and
//! keep the field names clients depend on.

use chrono::Utc;
use pretty_assertions::assert_eq;
use schemars::schema_for;
use pomo_core::entities::{AuditEntry, Pomodoro};
use pomo_core::enums::{AuditAction, PomodoroStatus};
use pomo_core::responses::ErrorResponse;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn completed_pomodoro() -> Pomodoro {
    let now = Utc::now();
    Pomodoro {
        id: 1,
        goal: "Write report".into(),
        reward_plan: "Coffee".into(),
        duration_minutes: 25,
        work_log: Some("Drafted section 1".into()),
        break_log: Some("Had coffee".into()),
        status: PomodoroStatus::Completed,
        created_at: now,
        work_finished_at: Some(now),
    }
}

#[test]
fn pomodoro_matches_schema() {
    let schema = serde_json::to_value(schema_for!(Pomodoro)).unwrap();
    let instance = serde_json::to_value(completed_pomodoro()).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
}

#[test]
fn pomodoro_field_names_are_stable() {
    let instance = serde_json::to_value(completed_pomodoro()).unwrap();
    let mut keys: Vec<&str> = instance
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "break_log",
            "completed_at",
            "created_at",
            "duration_minutes",
            "goal",
            "id",
            "reward_plan",
            "status",
            "work_log",
        ]
    );
}

#[test]
fn schema_rejects_unknown_status() {
    let schema = serde_json::to_value(schema_for!(Pomodoro)).unwrap();
    let mut instance = serde_json::to_value(completed_pomodoro()).unwrap();
    instance["status"] = serde_json::json!("paused");
    assert!(!validate_against_schema(&schema, &instance).is_empty());
}

#[test]
fn audit_entry_matches_schema() {
    let entry = AuditEntry {
        id: 3,
        pomodoro_id: 1,
        action: AuditAction::Created,
        from_status: None,
        to_status: PomodoroStatus::InProgress,
        created_at: Utc::now(),
    };
    let schema = serde_json::to_value(schema_for!(AuditEntry)).unwrap();
    let instance = serde_json::to_value(&entry).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
}

#[test]
fn error_response_shape() {
    let json = serde_json::to_string(&ErrorResponse::new("Pomodoro not found")).unwrap();
    assert_eq!(json, r#"{"error":"Pomodoro not found"}"#);
}
