use anyhow::Context;
use pomo_config::PomoConfig;

/// Load `.env`, then the layered configuration.
pub fn load_config() -> anyhow::Result<PomoConfig> {
    PomoConfig::load_with_dotenv().context("failed to load pomo configuration")
}
