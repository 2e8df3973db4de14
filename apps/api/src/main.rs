mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::service::AiService;
use crate::llm_client::AzureOpenAiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Missing completion settings abort startup before anything is bound
    let config = Config::from_env()?;
    init_tracing(&config.rust_log);

    info!(
        "Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let app = build_app(&config)?;

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

/// `RUST_LOG` from the environment wins; otherwise only this crate logs, at
/// the configured level.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), default_level))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn build_app(config: &Config) -> Result<Router> {
    let client = AzureOpenAiClient::new(config)?;
    info!(
        "Completion client ready ({}, timeout {}s)",
        client.deployment_url(),
        config.completion_timeout_secs
    );

    let state = AppState {
        ai: AiService::new(Arc::new(client)),
    };

    Ok(build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())) // TODO: restrict origins once the web client's host is fixed
}
