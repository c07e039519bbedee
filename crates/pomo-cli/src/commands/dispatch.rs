use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Run(args) => commands::run::handle(&args, ctx, flags).await,
        Commands::Start(args) => commands::start::handle(&args, &ctx, flags).await,
        Commands::LogWork(args) => commands::log::handle_work(&args, &ctx, flags).await,
        Commands::LogBreak(args) => commands::log::handle_break(&args, &ctx, flags).await,
        Commands::Cancel(args) => commands::cancel::handle(&args, &ctx, flags).await,
        Commands::Get(args) => commands::get::handle(&args, &ctx, flags).await,
        Commands::List(args) => commands::list::handle(&args, &ctx, flags).await,
        Commands::Audit(args) => commands::audit::handle(&args, &ctx, flags).await,
        Commands::Serve(_) | Commands::Schema(_) => {
            unreachable!("serve/schema are pre-dispatched in main")
        }
    }
}
