//! `dcf-web`: serves the DCF valuation form.

use anyhow::{Context, Result};
use dcf_valuation::server::{self, AppState, ServerConfig, logging::init_logging};
use dcf_valuation::{Renderer, YahooClient};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env().context("loading configuration")?;
    init_logging(&config.log_level, config.log_format);

    tracing::info!("dcf-web v{}", env!("CARGO_PKG_VERSION"));

    let client = YahooClient::builder()
        .timeout(config.http_timeout)
        .build()
        .context("building HTTP client")?;
    let renderer = Renderer::new().context("loading templates")?;
    let app = server::router(AppState::new(client, renderer));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C");
    }
}
