//! Lifecycle engine configuration.

use pomo_core::enums::TransitionPolicy;
use pomo_core::validation::{DEFAULT_DURATION_MINUTES, check_duration};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_duration_minutes() -> u32 {
    DEFAULT_DURATION_MINUTES
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LifecycleConfig {
    /// Whether out-of-order transitions are rejected (`strict`) or applied
    /// (`permissive`).
    #[serde(default)]
    pub policy: TransitionPolicy,

    /// Duration used when a create request omits `durationMinutes`.
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: u32,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            policy: TransitionPolicy::default(),
            default_duration_minutes: default_duration_minutes(),
        }
    }
}

impl LifecycleConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the default duration is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_duration(i64::from(self.default_duration_minutes)).map_err(|e| {
            ConfigError::InvalidValue {
                field: "lifecycle.default_duration_minutes".into(),
                reason: e.to_string(),
            }
        })?;
        Ok(())
    }
}
