use pomo_core::entities::{AuditEntry, Pomodoro};
use pomo_core::responses::ErrorResponse;
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `pomo schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name {
        SchemaType::Pomodoro => schema_for!(Pomodoro),
        SchemaType::Audit => schema_for!(AuditEntry),
        SchemaType::Error => schema_for!(ErrorResponse),
    };
    output(&schema, flags.format)
}
