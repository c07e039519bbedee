//! Client-side configuration for the `pomo` terminal client.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://127.0.0.1:3456".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Base URL of a running `pomo serve`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}
