use pomo_client::Transport;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IdArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(args: &IdArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let pomodoro = ctx.backend.get(args.id).await?;
    output(&pomodoro, flags.format)
}
