//! One session at a time: user intents in, view changes and timer events out.

use pomo_core::entities::Pomodoro;
use pomo_core::errors::CoreError;
use pomo_core::requests::CreatePomodoroRequest;
use pomo_core::validation::require_text;
use tokio::sync::mpsc;

use crate::error::{ClientError, ViewError};
use crate::timer::{CountdownTimer, TimerEvent};
use crate::transport::Transport;
use crate::view::{View, ViewState};

pub struct Controller<T> {
    transport: T,
    view: ViewState,
    timer: CountdownTimer,
    events: Option<mpsc::UnboundedReceiver<TimerEvent>>,
    current: Option<Pomodoro>,
    default_duration: u32,
}

impl<T: Transport> Controller<T> {
    #[must_use]
    pub const fn new(transport: T, default_duration: u32) -> Self {
        Self {
            transport,
            view: ViewState::new(),
            timer: CountdownTimer::new(),
            events: None,
            current: None,
            default_duration,
        }
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.view.current()
    }

    /// The session being worked on, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Pomodoro> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Create a session and start its countdown.
    ///
    /// # Errors
    ///
    /// `View` outside `setup`, `Validation` for blank text or an out of range
    /// duration (nothing is sent), or the transport failure.
    pub async fn start(
        &mut self,
        goal: &str,
        reward_plan: &str,
        duration_minutes: Option<i64>,
    ) -> Result<Pomodoro, ClientError> {
        if self.view() != View::Setup {
            return Err(ViewError {
                view: self.view(),
                intent: "start a session",
            }
            .into());
        }

        let request = CreatePomodoroRequest {
            goal: goal.to_string(),
            reward_plan: reward_plan.to_string(),
            duration_minutes,
        };
        let input = request
            .validate(self.default_duration)
            .map_err(|e| ClientError::Validation(validation_message(e)))?;
        let request = CreatePomodoroRequest {
            goal: input.goal,
            reward_plan: input.reward_plan,
            duration_minutes: Some(i64::from(input.duration_minutes)),
        };

        let created = self.transport.create(&request).await?;
        self.events = Some(self.timer.start(created.duration_seconds())?);
        self.view.on_started()?;
        self.current = Some(created.clone());
        Ok(created)
    }

    /// Wait for the next countdown event. `None` when no countdown is active.
    ///
    /// On `Expired` the view moves to `log-work`.
    pub async fn next_timer_event(&mut self) -> Option<TimerEvent> {
        let event = self.events.as_mut()?.recv().await;
        match event {
            Some(TimerEvent::Expired) => {
                self.events = None;
                if let Err(e) = self.view.on_timer_expired() {
                    tracing::warn!(error = %e, "timer expired outside the timer view");
                }
            }
            None => self.events = None,
            Some(TimerEvent::Progress { .. }) => {}
        }
        event
    }

    /// Store the work log and move on to the break.
    ///
    /// # Errors
    ///
    /// `View` outside `log-work`, `Validation` for a blank log, `NotFound`
    /// (the view returns to `setup`), or the transport failure.
    pub async fn record_work(&mut self, work_log: &str) -> Result<Pomodoro, ClientError> {
        let id = self.session_in(View::LogWork, "record work")?;
        let work_log = require_text("workLog", work_log)
            .map_err(|e| ClientError::Validation(validation_message(e)))?;

        let result = self.transport.record_work(id, &work_log).await;
        let updated = self.forget_on_not_found(result)?;
        self.view.on_work_recorded()?;
        self.current = Some(updated.clone());
        Ok(updated)
    }

    /// Store the break log and return to `setup`.
    ///
    /// # Errors
    ///
    /// `View` outside `log-break`, `Validation` for a blank log, `NotFound`
    /// (the view returns to `setup`), or the transport failure.
    pub async fn record_break(&mut self, break_log: &str) -> Result<Pomodoro, ClientError> {
        let id = self.session_in(View::LogBreak, "record a break")?;
        let break_log = require_text("breakLog", break_log)
            .map_err(|e| ClientError::Validation(validation_message(e)))?;

        let result = self.transport.record_break(id, &break_log).await;
        let updated = self.forget_on_not_found(result)?;
        self.view.on_break_recorded()?;
        self.current = None;
        Ok(updated)
    }

    /// Abandon the session: the countdown stops immediately and the view
    /// returns to `setup`. The remote cancel is best-effort.
    ///
    /// # Errors
    ///
    /// `View` from `setup`.
    pub async fn cancel(&mut self) -> Result<(), ClientError> {
        self.view.on_cancelled()?;
        self.timer.stop();
        self.events = None;

        if let Some(session) = self.current.take() {
            if let Err(e) = self.transport.cancel(session.id).await {
                tracing::warn!(id = session.id, error = %e, "cancel request failed");
            }
        }
        Ok(())
    }

    /// Most recent sessions first.
    ///
    /// # Errors
    ///
    /// The transport failure.
    pub async fn history(&self, limit: u32) -> Result<Vec<Pomodoro>, ClientError> {
        self.transport.list(limit).await
    }

    fn session_in(&self, view: View, intent: &'static str) -> Result<i64, ClientError> {
        match (&self.current, self.view()) {
            (Some(session), current) if current == view => Ok(session.id),
            (_, current) => Err(ViewError {
                view: current,
                intent,
            }
            .into()),
        }
    }

    fn forget_on_not_found(
        &mut self,
        result: Result<Pomodoro, ClientError>,
    ) -> Result<Pomodoro, ClientError> {
        if matches!(result, Err(ClientError::NotFound)) {
            self.timer.stop();
            self.events = None;
            self.current = None;
            self.view.reset();
        }
        result
    }
}

/// The bare message of a validation failure, without the error-kind prefix.
fn validation_message(err: CoreError) -> String {
    let CoreError::Validation(msg) = err;
    msg
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::Utc;
    use pomo_core::entities::AuditEntry;
    use pomo_core::enums::PomodoroStatus;
    use pretty_assertions::assert_eq;

    use super::*;

    /// In-memory transport that records calls and can be told to fail.
    #[derive(Default)]
    struct FakeTransport {
        sessions: Mutex<Vec<Pomodoro>>,
        fail_cancel: bool,
        forget_sessions: bool,
        calls: Mutex<Vec<String>>,
    }

    impl FakeTransport {
        fn log(&self, call: &str) {
            self.calls.lock().unwrap().push(call.to_string());
        }

        fn find(&self, id: i64) -> Result<Pomodoro, ClientError> {
            if self.forget_sessions {
                return Err(ClientError::NotFound);
            }
            self.sessions
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(ClientError::NotFound)
        }

        fn modify(
            &self,
            id: i64,
            f: impl FnOnce(&mut Pomodoro),
        ) -> Result<Pomodoro, ClientError> {
            self.find(id)?;
            let mut sessions = self.sessions.lock().unwrap();
            let session = sessions
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(ClientError::NotFound)?;
            f(session);
            Ok(session.clone())
        }
    }

    impl Transport for FakeTransport {
        async fn create(&self, request: &CreatePomodoroRequest) -> Result<Pomodoro, ClientError> {
            self.log("create");
            let mut sessions = self.sessions.lock().unwrap();
            let pomodoro = Pomodoro {
                id: i64::try_from(sessions.len()).unwrap() + 1,
                goal: request.goal.clone(),
                reward_plan: request.reward_plan.clone(),
                duration_minutes: u32::try_from(request.duration_minutes.unwrap()).unwrap(),
                work_log: None,
                break_log: None,
                status: PomodoroStatus::InProgress,
                created_at: Utc::now(),
                work_finished_at: None,
            };
            sessions.push(pomodoro.clone());
            Ok(pomodoro)
        }

        async fn list(&self, limit: u32) -> Result<Vec<Pomodoro>, ClientError> {
            let sessions = self.sessions.lock().unwrap();
            Ok(sessions
                .iter()
                .rev()
                .take(limit as usize)
                .cloned()
                .collect())
        }

        async fn get(&self, id: i64) -> Result<Pomodoro, ClientError> {
            self.find(id)
        }

        async fn record_work(&self, id: i64, work_log: &str) -> Result<Pomodoro, ClientError> {
            self.log("record_work");
            self.modify(id, |p| {
                p.work_log = Some(work_log.to_string());
                p.status = PomodoroStatus::WorkDone;
                p.work_finished_at = Some(Utc::now());
            })
        }

        async fn record_break(&self, id: i64, break_log: &str) -> Result<Pomodoro, ClientError> {
            self.log("record_break");
            self.modify(id, |p| {
                p.break_log = Some(break_log.to_string());
                p.status = PomodoroStatus::Completed;
            })
        }

        async fn cancel(&self, id: i64) -> Result<Pomodoro, ClientError> {
            self.log("cancel");
            if self.fail_cancel {
                return Err(ClientError::Server {
                    status: 500,
                    message: "database is locked".into(),
                });
            }
            self.modify(id, |p| p.status = PomodoroStatus::Cancelled)
        }

        async fn audit(&self, _id: i64) -> Result<Vec<AuditEntry>, ClientError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn blank_goal_is_rejected_without_a_request() {
        let mut controller = Controller::new(FakeTransport::default(), 25);
        let err = controller.start("  ", "Coffee", Some(25)).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(ref msg) if msg == "goal must not be empty"));
        assert!(controller.transport().calls.lock().unwrap().is_empty());
        assert_eq!(controller.view(), View::Setup);
    }

    #[tokio::test(start_paused = true)]
    async fn start_sends_trimmed_values_and_default_duration() {
        let mut controller = Controller::new(FakeTransport::default(), 25);
        let p = controller.start(" Write ", " Tea ", None).await.unwrap();
        assert_eq!(p.goal, "Write");
        assert_eq!(p.reward_plan, "Tea");
        assert_eq!(p.duration_minutes, 25);
        assert_eq!(controller.view(), View::Timer);
    }

    #[tokio::test(start_paused = true)]
    async fn failing_cancel_still_returns_to_setup() {
        let transport = FakeTransport {
            fail_cancel: true,
            ..FakeTransport::default()
        };
        let mut controller = Controller::new(transport, 25);
        controller.start("Write", "Tea", Some(1)).await.unwrap();

        controller.cancel().await.unwrap();
        assert_eq!(controller.view(), View::Setup);
        assert!(controller.current().is_none());
        assert_eq!(controller.next_timer_event().await, None);
        assert_eq!(
            *controller.transport().calls.lock().unwrap(),
            vec!["create", "cancel"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_from_setup_is_a_view_error() {
        let mut controller = Controller::new(FakeTransport::default(), 25);
        assert!(matches!(controller.cancel().await, Err(ClientError::View(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn record_work_before_expiry_is_a_view_error() {
        let mut controller = Controller::new(FakeTransport::default(), 25);
        controller.start("Write", "Tea", Some(1)).await.unwrap();
        let err = controller.record_work("early").await.unwrap_err();
        assert!(matches!(err, ClientError::View(_)));
        assert_eq!(controller.view(), View::Timer);
    }

    #[tokio::test(start_paused = true)]
    async fn not_found_returns_to_setup() {
        let transport = FakeTransport {
            forget_sessions: true,
            ..FakeTransport::default()
        };
        let mut controller = Controller::new(transport, 25);
        controller.start("Write", "Tea", Some(1)).await.unwrap();
        while controller.next_timer_event().await.is_some() {}
        assert_eq!(controller.view(), View::LogWork);

        let err = controller.record_work("done").await.unwrap_err();
        assert!(matches!(err, ClientError::NotFound));
        assert_eq!(controller.view(), View::Setup);
        assert!(controller.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn blank_break_log_keeps_the_view() {
        let mut controller = Controller::new(FakeTransport::default(), 25);
        controller.start("Write", "Tea", Some(1)).await.unwrap();
        while controller.next_timer_event().await.is_some() {}
        controller.record_work("done").await.unwrap();

        let err = controller.record_break("   ").await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(controller.view(), View::LogBreak);
    }
}
