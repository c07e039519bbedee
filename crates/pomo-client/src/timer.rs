//! Countdown timer for the work phase.
//!
//! [`Countdown`] is the pure state machine; [`CountdownTimer`] drives one on a
//! tokio task with a one-second interval and pushes [`TimerEvent`]s into a
//! channel. Nothing here is persisted.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::TimerError;

/// Seconds at or below which the countdown is in its final minute.
const FINAL_MINUTE_SECS: u64 = 60;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountdownState {
    #[default]
    Idle,
    Running { remaining: u64, total: u64 },
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerEvent {
    Progress {
        remaining: u64,
        total: u64,
        /// `(total - remaining) / total`, in `[0, 1)`.
        elapsed_fraction: f64,
    },
    /// Emitted exactly once, when `remaining` reaches zero.
    Expired,
}

impl TimerEvent {
    #[allow(clippy::cast_precision_loss)]
    fn progress(remaining: u64, total: u64) -> Self {
        Self::Progress {
            remaining,
            total,
            elapsed_fraction: (total - remaining) as f64 / total as f64,
        }
    }

    /// Whether the countdown is in its last minute (and not yet expired).
    #[must_use]
    pub const fn in_final_minute(&self) -> bool {
        matches!(self, Self::Progress { remaining, .. } if *remaining <= FINAL_MINUTE_SECS)
    }
}

#[derive(Debug, Default)]
pub struct Countdown {
    state: CountdownState,
}

impl Countdown {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: CountdownState::Idle,
        }
    }

    #[must_use]
    pub const fn state(&self) -> CountdownState {
        self.state
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, CountdownState::Running { .. })
    }

    /// Begin counting down from `total` seconds. Returns the initial progress.
    ///
    /// # Errors
    ///
    /// `AlreadyRunning` while a countdown is running, `ZeroDuration` for `total = 0`.
    pub fn start(&mut self, total: u64) -> Result<TimerEvent, TimerError> {
        if self.is_running() {
            return Err(TimerError::AlreadyRunning);
        }
        if total == 0 {
            return Err(TimerError::ZeroDuration);
        }
        self.state = CountdownState::Running {
            remaining: total,
            total,
        };
        Ok(TimerEvent::progress(total, total))
    }

    /// Advance by one second. `None` unless running.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        let CountdownState::Running { remaining, total } = self.state else {
            return None;
        };
        let remaining = remaining - 1;
        if remaining == 0 {
            self.state = CountdownState::Expired;
            return Some(TimerEvent::Expired);
        }
        self.state = CountdownState::Running { remaining, total };
        Some(TimerEvent::progress(remaining, total))
    }

    /// Abandon a running countdown. No-op otherwise.
    pub fn stop(&mut self) {
        if self.is_running() {
            self.state = CountdownState::Idle;
        }
    }
}

/// Drives a [`Countdown`] in real time. At most one countdown runs per timer.
#[derive(Debug, Default)]
pub struct CountdownTimer {
    tick_task: Option<JoinHandle<()>>,
}

impl CountdownTimer {
    #[must_use]
    pub const fn new() -> Self {
        Self { tick_task: None }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.tick_task
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Start a countdown of `total_seconds`.
    ///
    /// The returned channel first yields the initial progress, then one
    /// progress event per second, then a single `Expired`, then closes.
    ///
    /// # Errors
    ///
    /// `AlreadyRunning` if a countdown from this timer is still running,
    /// `ZeroDuration` for `total_seconds = 0`.
    pub fn start(
        &mut self,
        total_seconds: u64,
    ) -> Result<mpsc::UnboundedReceiver<TimerEvent>, TimerError> {
        if self.is_running() {
            return Err(TimerError::AlreadyRunning);
        }

        let mut countdown = Countdown::new();
        let initial = countdown.start(total_seconds)?;
        let (tx, rx) = mpsc::unbounded_channel();
        let _ = tx.send(initial);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(1));
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let Some(event) = countdown.tick() else {
                    return;
                };
                let expired = event == TimerEvent::Expired;
                if tx.send(event).is_err() || expired {
                    return;
                }
            }
        });

        self.tick_task = Some(task);
        Ok(rx)
    }

    /// Stop the running countdown, if any. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let Some(handle) = self.tick_task.take() {
            handle.abort();
        }
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
