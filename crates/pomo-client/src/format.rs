//! Display helpers shared by front ends.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

/// `MM:SS`, with minutes growing past two digits when needed.
#[must_use]
pub fn format_time(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// History timestamp relative to `now`: `Today 14:05`, `Yesterday 09:30`,
/// otherwise `Feb 9 14:30`. Both times should be in the viewer's zone.
#[must_use]
pub fn relative_time<Tz>(at: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let hhmm = at.format("%H:%M");
    let day = at.date_naive();
    let today = now.date_naive();

    if day == today {
        format!("Today {hhmm}")
    } else if today.pred_opt() == Some(day) {
        format!("Yesterday {hhmm}")
    } else {
        format!("{} {hhmm}", at.format("%b %-d"))
    }
}
