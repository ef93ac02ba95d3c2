mod canonical_host;
mod catalog;
mod config;
mod contact;
mod content;
mod errors;
mod models;
mod pages;
mod resume;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::SmtpMailer;
use crate::resume::ProcessRunner;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; only malformed values are fatal
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    // Mail is optional at startup; submissions fail until it is configured
    let missing = config.smtp.missing_fields();
    if missing.is_empty() {
        info!(
            "SMTP configured: {}:{} -> {}",
            config.smtp.host,
            config.smtp.port,
            config.smtp.to_email.as_deref().unwrap_or_default()
        );
    } else {
        warn!(
            "SMTP not fully configured (missing {}); contact form submissions will fail",
            missing.join(", ")
        );
    }

    if !config.resume.source.exists() {
        warn!(
            "Resume source {} not found; resume routes will return 404",
            config.resume.source.display()
        );
    }

    let mailer = Arc::new(SmtpMailer::new(config.smtp.clone()));
    let runner = Arc::new(ProcessRunner);
    let port = config.port;
    let state = AppState::build(config, mailer, runner)?;
    info!(
        "Loaded {} projects for {}",
        state.catalog.all().len(),
        state.personal.name
    );

    // Build router
    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
