//! Server entry point: binds the listener and serves the API router.

use std::net::SocketAddr;

use anyhow::Context;

/// Default TCP port, overridable via `MOVE_SERVER_PORT`.
const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let port = match std::env::var("MOVE_SERVER_PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .with_context(|| format!("invalid MOVE_SERVER_PORT: {raw}"))?,
        Err(_) => DEFAULT_PORT,
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    axum::serve(listener, move_server::app())
        .await
        .context("Server error")?;

    Ok(())
}
