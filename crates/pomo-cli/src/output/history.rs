use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use pomo_client::format::relative_time;
use pomo_core::entities::Pomodoro;

use super::table::{TableOptions, render_entity_table};

pub const EMPTY_HISTORY: &str = "No sessions yet. Start your first Pomodoro!";

const HEADERS: [&str; 5] = ["Time", "Goal", "Dur.", "Work Log", "Status"];

/// History table with timestamps relative to `now`, in `now`'s zone.
#[must_use]
pub fn render_history<Tz>(sessions: &[Pomodoro], now: &DateTime<Tz>, options: TableOptions) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if sessions.is_empty() {
        return EMPTY_HISTORY.to_string();
    }

    let zone = now.timezone();
    let rows = sessions
        .iter()
        .map(|session| {
            vec![
                relative_time(&session.created_at.with_timezone(&zone), now),
                session.goal.clone(),
                format!("{}m", session.duration_minutes),
                session.work_log.clone().unwrap_or_else(|| "-".to_string()),
                session.status.label().to_string(),
            ]
        })
        .collect::<Vec<_>>();

    render_entity_table(&HEADERS, &rows, options)
}
