//! Entity structs for the Pomo domain.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema`; field names are the wire names
//! of the REST surface.

mod audit;
mod pomodoro;

pub use audit::AuditEntry;
pub use pomodoro::Pomodoro;
