//! HTTP server: binds the Axum app and serves it until Ctrl-C.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::Router;
use tracing::{info, warn};

use crate::config::Config;

/// Bind `config.socket_addr()` and serve `app` until a shutdown signal arrives.
pub async fn serve(config: &Config, app: Router) -> Result<()> {
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("HTTP server: bind to {} failed", addr))?;
    let local_addr = listener.local_addr().context("HTTP server: no local address")?;

    info!(service = "http", "Listening on http://{}", local_addr);
    info!(service = "http", "Server is ready at {}", graphql_url(local_addr));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("axum::serve")?;

    info!(service = "http", "HTTP server stopped");
    Ok(())
}

/// Public GraphQL endpoint for a bound address
fn graphql_url(addr: SocketAddr) -> String {
    format!("http://{}/graphql", addr)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(service = "http", "Shutdown signal received"),
        Err(e) => {
            warn!(service = "http", error = %e, "Failed to listen for Ctrl-C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
