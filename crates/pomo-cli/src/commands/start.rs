use pomo_client::Transport;
use pomo_core::requests::CreatePomodoroRequest;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SessionArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pomo start`: create the session and return without a countdown.
pub async fn handle(args: &SessionArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let request = CreatePomodoroRequest {
        goal: args.goal.clone(),
        reward_plan: args.reward.clone(),
        duration_minutes: args.minutes,
    };
    let pomodoro = ctx.backend.create(&request).await?;
    output(&pomodoro, flags.format)
}
