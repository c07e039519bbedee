use std::sync::Arc;

use anyhow::Context;
use pomo_config::PomoConfig;
use pomo_core::enums::TransitionPolicy;
use pomo_db::PomoService;
use tokio::net::TcpListener;

use crate::cli::root_commands::ServeArgs;
use crate::commands::shared::parse::parse_enum;

/// Handle `pomo serve`: run the API until Ctrl-C.
pub async fn handle(args: &ServeArgs, config: PomoConfig) -> anyhow::Result<()> {
    let config = apply_overrides(args, config)?;
    let addr = config.server.socket_addr()?;

    let service = PomoService::open_local(
        &config.database.path,
        config.lifecycle.policy,
        config.lifecycle.default_duration_minutes,
    )
    .await
    .with_context(|| format!("failed to open database at {}", config.database.path))?;
    tracing::info!(
        db = %config.database.path,
        policy = %config.lifecycle.policy,
        "session store ready"
    );

    let app = pomo_api::router(Arc::new(service), config.general.default_limit);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    pomo_api::serve(listener, app, shutdown_signal())
        .await
        .context("pomo API server stopped unexpectedly")
}

fn apply_overrides(args: &ServeArgs, mut config: PomoConfig) -> anyhow::Result<PomoConfig> {
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(db) = &args.db {
        config.database.path.clone_from(db);
    }
    if let Some(policy) = &args.policy {
        config.lifecycle.policy = parse_enum::<TransitionPolicy>(policy, "policy")?;
    }
    Ok(config)
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for Ctrl-C");
        return;
    }
    tracing::info!("shutting down");
}
