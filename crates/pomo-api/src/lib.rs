//! # pomo-api
//!
//! HTTP/JSON surface over [`pomo_db::PomoService`].
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | POST | `/api/pomodoros` | 201 + session |
//! | GET | `/api/pomodoros?limit=N` | 200 + sessions |
//! | GET | `/api/pomodoros/{id}` | 200 + session |
//! | PATCH | `/api/pomodoros/{id}/work-log` | 200 + session |
//! | PATCH | `/api/pomodoros/{id}/break-log` | 200 + session |
//! | PATCH | `/api/pomodoros/{id}/cancel` | 200 + session |
//! | GET | `/api/pomodoros/{id}/audit` | 200 + audit entries |
//!
//! Every failure is a JSON `{ "error": "..." }` body; see [`ApiError`].

mod error;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::router;

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;

/// Serve `app` on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns the I/O error that stopped the accept loop.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "pomo API listening");
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
