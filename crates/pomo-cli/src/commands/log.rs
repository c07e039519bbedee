use pomo_client::Transport;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LogArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pomo log-work`.
pub async fn handle_work(args: &LogArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let pomodoro = ctx.backend.record_work(args.id, &args.text).await?;
    output(&pomodoro, flags.format)
}

/// Handle `pomo log-break`.
pub async fn handle_break(args: &LogArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let pomodoro = ctx.backend.record_break(args.id, &args.text).await?;
    output(&pomodoro, flags.format)
}
