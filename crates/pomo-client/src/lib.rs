//! # pomo-client
//!
//! Everything a Pomo front end needs besides drawing:
//!
//! - [`Transport`]: the seam to the session lifecycle, over HTTP
//!   ([`HttpTransport`]) or in-process against a [`pomo_db::PomoService`]
//! - [`CountdownTimer`]: a one-second countdown driven by a tokio task
//! - [`ViewState`]: which screen is showing and what may move it
//! - [`Controller`]: wires the three together for one session at a time
//! - [`format`]: `MM:SS` and history timestamp rendering

mod controller;
mod error;
pub mod format;
mod http;
mod local;
mod timer;
mod transport;
mod view;

pub use controller::Controller;
pub use error::{ClientError, TimerError, ViewError};
pub use http::HttpTransport;
pub use timer::{Countdown, CountdownState, CountdownTimer, TimerEvent};
pub use transport::Transport;
pub use view::{View, ViewState};
