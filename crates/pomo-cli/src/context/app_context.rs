use anyhow::Context;
use pomo_client::HttpTransport;
use pomo_config::PomoConfig;
use pomo_db::PomoService;

use super::Backend;
use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: PomoConfig,
    pub backend: Backend,
}

impl AppContext {
    /// Pick the backend from the global flags: `--local` opens the configured
    /// database, otherwise requests go to `--server` or `client.base_url`.
    pub async fn init(config: PomoConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let backend = if flags.local {
            let service = PomoService::open_local(
                &config.database.path,
                config.lifecycle.policy,
                config.lifecycle.default_duration_minutes,
            )
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;
            Backend::Local(service)
        } else {
            let base_url = flags
                .server
                .clone()
                .unwrap_or_else(|| config.client.base_url.clone());
            Backend::Http(HttpTransport::new(base_url))
        };

        tracing::debug!(backend = backend.describe(), "application context ready");
        Ok(Self { config, backend })
    }

    /// Minutes used when a session is started without `--minutes`.
    #[must_use]
    pub const fn default_duration(&self) -> u32 {
        self.config.lifecycle.default_duration_minutes
    }
}
