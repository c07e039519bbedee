use chrono::Local;
use pomo_client::Transport;
use pomo_core::enums::PomodoroStatus;

use crate::cli::root_commands::ListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::{history, output, table_options};

/// Handle `pomo list`. The table format renders the history view.
pub async fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let status = args
        .status
        .as_deref()
        .map(|raw| parse_enum::<PomodoroStatus>(raw, "status"))
        .transpose()?;

    let mut sessions = ctx.backend.list(compute_fetch_limit(limit, status)).await?;
    if let Some(status) = status {
        sessions.retain(|session| session.status == status);
    }
    sessions.truncate(usize::try_from(limit)?);

    if flags.format == OutputFormat::Table {
        println!(
            "{}",
            history::render_history(&sessions, &Local::now(), table_options())
        );
        return Ok(());
    }
    output(&sessions, flags.format)
}

/// Over-fetch when filtering client-side so the page still fills up.
fn compute_fetch_limit(limit: u32, status: Option<PomodoroStatus>) -> u32 {
    if status.is_some() {
        limit.saturating_mul(5).min(500)
    } else {
        limit
    }
}
