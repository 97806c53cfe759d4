mod ai_assist;
mod config;
mod document;
mod editors;
mod errors;
mod export;
mod i18n;
mod remote;
mod routes;
mod session;
mod state;
mod steps;
mod templates;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ai_assist::AiAssistClient;
use crate::config::Config;
use crate::export::{DirectorySink, PdfExporter};
use crate::remote::HttpRemote;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Builder API v{}", env!("CARGO_PKG_VERSION"));

    // Remote CV service gateway, shared by AI-Assist and export
    let remote = Arc::new(
        HttpRemote::new(
            &config.cv_api_base_url,
            config.cv_api_token.clone(),
            config.http_timeout(),
        )
        .context("Failed to build the remote CV service client")?,
    );
    info!("Remote CV service: {}", remote.base_url());

    let policy = config.retry_policy();
    info!(
        "AI-Assist retry policy: {} retries, {}ms linear backoff",
        policy.max_retries,
        policy.base_delay.as_millis()
    );

    let downloads = DirectorySink::new(&config.export_dir).with_context(|| {
        format!(
            "Failed to create export directory {}",
            config.export_dir.display()
        )
    })?;
    info!("Exports are saved to {}", downloads.dir().display());

    let sessions = SessionStore::new();
    sessions.spawn_expiry(config.session_ttl(), config.session_sweep_period());
    info!(
        "Idle builder sessions expire after {}s",
        config.session_ttl().as_secs()
    );

    let state = AppState {
        sessions,
        assist: AiAssistClient::new(remote.clone(), policy),
        exporter: PdfExporter::new(remote),
        downloads: Arc::new(downloads),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
