//! Which screen the client is showing, and the events that move it.
//!
//! ```text
//! setup ──started──▶ timer ──expired──▶ log-work ──work recorded──▶ log-break
//!   ▲                  │                   │                           │
//!   └────cancelled─────┴───────────────────┴──────break recorded───────┘
//! ```
//!
//! Only transport results and timer signals move the view.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ViewError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Setup,
    Timer,
    LogWork,
    LogBreak,
}

impl View {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Timer => "timer",
            Self::LogWork => "log-work",
            Self::LogBreak => "log-break",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    view: View,
}

impl ViewState {
    #[must_use]
    pub const fn new() -> Self {
        Self { view: View::Setup }
    }

    #[must_use]
    pub const fn current(&self) -> View {
        self.view
    }

    fn advance(&mut self, from: &[View], to: View, intent: &'static str) -> Result<View, ViewError> {
        if !from.contains(&self.view) {
            return Err(ViewError {
                view: self.view,
                intent,
            });
        }
        self.view = to;
        Ok(to)
    }

    /// A session was created. `setup` → `timer`.
    ///
    /// # Errors
    ///
    /// `ViewError` unless in `setup`.
    pub fn on_started(&mut self) -> Result<View, ViewError> {
        self.advance(&[View::Setup], View::Timer, "start a session")
    }

    /// The countdown expired. `timer` → `log-work`.
    ///
    /// # Errors
    ///
    /// `ViewError` unless in `timer`.
    pub fn on_timer_expired(&mut self) -> Result<View, ViewError> {
        self.advance(&[View::Timer], View::LogWork, "finish the work phase")
    }

    /// The work log was stored. `log-work` → `log-break`.
    ///
    /// # Errors
    ///
    /// `ViewError` unless in `log-work`.
    pub fn on_work_recorded(&mut self) -> Result<View, ViewError> {
        self.advance(&[View::LogWork], View::LogBreak, "record work")
    }

    /// The break log was stored. `log-break` → `setup`.
    ///
    /// # Errors
    ///
    /// `ViewError` unless in `log-break`.
    pub fn on_break_recorded(&mut self) -> Result<View, ViewError> {
        self.advance(&[View::LogBreak], View::Setup, "record a break")
    }

    /// The session was abandoned. Any in-session view → `setup`.
    ///
    /// # Errors
    ///
    /// `ViewError` from `setup`, where there is nothing to cancel.
    pub fn on_cancelled(&mut self) -> Result<View, ViewError> {
        self.advance(
            &[View::Timer, View::LogWork, View::LogBreak],
            View::Setup,
            "cancel",
        )
    }

    /// The server no longer knows the session. Back to `setup` from anywhere.
    pub const fn reset(&mut self) -> View {
        self.view = View::Setup;
        self.view
    }
}
