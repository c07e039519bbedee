//! `pomo run`: one full session in the terminal.
//!
//! Setup happens on the command line; the countdown draws a bar on stderr;
//! expiry rings the bell once and asks for the work log, then the break log.
//! Ctrl-C at any point cancels the session.

use std::io::Write;

use pomo_client::format::format_time;
use pomo_client::{ClientError, Controller, TimerEvent, Transport};
use pomo_core::entities::Pomodoro;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SessionArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

const BELL: char = '\u{7}';

type InputLines = Lines<BufReader<Stdin>>;

enum Step {
    Timer(Option<TimerEvent>),
    Interrupted,
}

enum Input {
    Line(String),
    Closed,
    Interrupted,
}

#[derive(Clone, Copy)]
enum Stage {
    Work,
    Break,
}

impl Stage {
    const fn prompt(self) -> &'static str {
        match self {
            Self::Work => "What did you get done? ",
            Self::Break => "How did you spend your break? ",
        }
    }
}

pub async fn handle(args: &SessionArgs, ctx: AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let default_duration = ctx.default_duration();
    let mut controller = Controller::new(ctx.backend, default_duration);

    let session = controller
        .start(&args.goal, &args.reward, args.minutes)
        .await?;
    notice(
        flags,
        &format!(
            "Session {} started: {} ({}m)",
            session.id, session.goal, session.duration_minutes
        ),
    );

    if !run_countdown(&mut controller, &session).await? {
        return abandon(&mut controller, flags).await;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if collect_log(&mut controller, &mut lines, Stage::Work).await?.is_none() {
        return abandon(&mut controller, flags).await;
    }
    notice(flags, &format!("Enjoy your reward: {}", session.reward_plan));

    let Some(finished) = collect_log(&mut controller, &mut lines, Stage::Break).await? else {
        return abandon(&mut controller, flags).await;
    };
    output(&finished, flags.format)
}

/// Drive the bar until expiry. `false` when interrupted.
async fn run_countdown<T: Transport>(
    controller: &mut Controller<T>,
    session: &Pomodoro,
) -> anyhow::Result<bool> {
    let bar = Progress::countdown(session.duration_seconds(), &session.goal);

    loop {
        let step = tokio::select! {
            event = controller.next_timer_event() => Step::Timer(event),
            _ = tokio::signal::ctrl_c() => Step::Interrupted,
        };

        match step {
            Step::Timer(Some(event @ TimerEvent::Progress { .. })) => {
                let (position, prefix) = progress_update(&event);
                bar.set_position(position);
                bar.set_prefix(&prefix);
                if event.in_final_minute() {
                    bar.set_message("final minute");
                }
            }
            Step::Timer(Some(TimerEvent::Expired)) => {
                bar.finish_clear();
                eprintln!("{BELL}Time's up! {}", session.goal);
                return Ok(true);
            }
            Step::Timer(None) => {
                bar.finish_err("countdown stopped");
                anyhow::bail!("countdown stopped before the session expired");
            }
            Step::Interrupted => {
                bar.finish_err("cancelled");
                return Ok(false);
            }
        }
    }
}

/// Prompt until the log is accepted. `None` when the user interrupts or
/// stdin closes.
async fn collect_log<T: Transport>(
    controller: &mut Controller<T>,
    lines: &mut InputLines,
    stage: Stage,
) -> anyhow::Result<Option<Pomodoro>> {
    loop {
        let text = match read_input(lines, stage.prompt()).await? {
            Input::Line(text) => text,
            Input::Closed | Input::Interrupted => return Ok(None),
        };

        let saving = Progress::spinner("Saving...");
        let result = match stage {
            Stage::Work => controller.record_work(&text).await,
            Stage::Break => controller.record_break(&text).await,
        };
        saving.finish_clear();

        match result {
            Ok(pomodoro) => return Ok(Some(pomodoro)),
            Err(ClientError::Validation(message)) => eprintln!("{message}"),
            Err(error) => return Err(error.into()),
        }
    }
}

async fn read_input(lines: &mut InputLines, prompt: &str) -> anyhow::Result<Input> {
    eprint!("{prompt}");
    std::io::stderr().flush()?;

    tokio::select! {
        line = lines.next_line() => Ok(line?.map_or(Input::Closed, Input::Line)),
        _ = tokio::signal::ctrl_c() => Ok(Input::Interrupted),
    }
}

async fn abandon<T: Transport>(
    controller: &mut Controller<T>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let id = controller.current().map(|session| session.id);
    controller.cancel().await?;
    if let Some(id) = id {
        notice(flags, &format!("Session {id} cancelled."));
    }
    Ok(())
}

fn progress_update(event: &TimerEvent) -> (u64, String) {
    match event {
        TimerEvent::Progress {
            remaining, total, ..
        } => (total - remaining, format_time(*remaining)),
        TimerEvent::Expired => (0, format_time(0)),
    }
}

fn notice(flags: &GlobalFlags, message: &str) {
    if !flags.quiet {
        eprintln!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use pomo_client::TimerEvent;

    use super::{Stage, progress_update};

    #[test]
    fn progress_position_is_elapsed_seconds() {
        let event = TimerEvent::Progress {
            remaining: 1499,
            total: 1500,
            elapsed_fraction: 1.0 / 1500.0,
        };
        assert_eq!(progress_update(&event), (1, "24:59".to_string()));
    }

    #[test]
    fn final_second_shows_zero_minutes() {
        let event = TimerEvent::Progress {
            remaining: 1,
            total: 60,
            elapsed_fraction: 59.0 / 60.0,
        };
        assert_eq!(progress_update(&event), (59, "00:01".to_string()));
    }

    #[test]
    fn prompts_differ_per_stage() {
        assert_ne!(Stage::Work.prompt(), Stage::Break.prompt());
    }
}
