//! Painel - hosted-auth dashboard backend
//!
//! Main entry point for the HTTP server.

use std::sync::Arc;

use anyhow::Context;
use painel_lib::{router, AppContext};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging FIRST so we can see .env loading
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables from .env file
    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(path = %path.display(), "Loaded .env"),
        Err(e) => tracing::debug!(error = %e, "Could not load .env file"),
    }

    let config = painel_infra::config::load().context("failed to load configuration")?;
    let bind_addr = config.server.bind_addr.clone();

    let ctx = Arc::new(AppContext::new(config).context("failed to build application context")?);

    // Optimistic snapshot restore, then the freshness check in the background
    ctx.session.initialize().await;
    {
        let session = Arc::clone(&ctx.session);
        tokio::spawn(async move {
            session.revalidate().await;
        });
    }

    let app = router(ctx);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "Painel listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
