use pomo_client::Transport;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IdArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pomo audit`: transitions of one session, oldest first.
pub async fn handle(args: &IdArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entries = ctx.backend.audit(args.id).await?;
    output(&entries, flags.format)
}
