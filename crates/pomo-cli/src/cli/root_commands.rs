use clap::{Args, Subcommand, ValueEnum};

/// Top-level commands.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Serve the pomodoro REST API
    Serve(ServeArgs),
    /// Run one full session: countdown, work log, break log
    Run(SessionArgs),
    /// Create a session without running the countdown
    Start(SessionArgs),
    /// Record what was accomplished during a session
    LogWork(LogArgs),
    /// Record how the break was spent, completing the session
    LogBreak(LogArgs),
    /// Cancel a session
    Cancel(IdArgs),
    /// Show one session
    Get(IdArgs),
    /// Recent sessions, newest first
    List(ListArgs),
    /// Lifecycle history of one session
    Audit(IdArgs),
    /// Print the JSON Schema of a wire type
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides server.port)
    #[arg(long)]
    pub port: Option<u16>,

    /// Database file (overrides database.path)
    #[arg(long)]
    pub db: Option<String>,

    /// Transition policy: strict or permissive (overrides lifecycle.policy)
    #[arg(long)]
    pub policy: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SessionArgs {
    /// What this session is for
    #[arg(long)]
    pub goal: String,

    /// What you get when it is done
    #[arg(long)]
    pub reward: String,

    /// Length of the work period (1-90, defaults to lifecycle.default_duration_minutes)
    #[arg(long)]
    pub minutes: Option<i64>,
}

#[derive(Clone, Debug, Args)]
pub struct LogArgs {
    /// Session id
    pub id: i64,

    /// Log text
    pub text: String,
}

#[derive(Clone, Debug, Args)]
pub struct IdArgs {
    /// Session id
    pub id: i64,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Only sessions in this status (in_progress, work_done, completed, cancelled)
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Pomodoro,
    Audit,
    Error,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Which wire type to describe
    #[arg(value_enum, default_value = "pomodoro")]
    pub type_name: SchemaType,
}
