//! Update builder types for session mutations.
//!
//! The builder produces an update struct with `Option` fields. Only `Some`
//! fields generate SET clauses in the dynamic UPDATE SQL.

mod pomodoro;

pub use pomodoro::{PomodoroUpdate, PomodoroUpdateBuilder};
