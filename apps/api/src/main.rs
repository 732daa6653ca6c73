mod backend;
mod config;
mod errors;
mod interview;
mod matching;
mod models;
mod routes;
mod scoring;
mod session;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::{BackendClient, InterviewSink};
use crate::config::Config;
use crate::interview::questions::ShuffleSelector;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting job-board scoring API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Performance tiers: excellent>={} good>={} average>={}",
        config.tier_table.excellent, config.tier_table.good, config.tier_table.average
    );

    let interview_sink: Option<Arc<dyn InterviewSink>> = match &config.backend_url {
        Some(url) => {
            let client: Arc<dyn InterviewSink> = Arc::new(
                BackendClient::new(url.clone()).context("Failed to build backend HTTP client")?,
            );
            info!("Forwarding interview results to {url}");
            Some(client)
        }
        None => {
            info!("BACKEND_URL not set; interview results will not be forwarded");
            None
        }
    };

    let question_selector = Arc::new(ShuffleSelector {
        seed: config.question_seed,
    });
    if let Some(seed) = config.question_seed {
        info!("Question selection seeded with {seed}");
    }

    let state = AppState {
        config: config.clone(),
        question_selector,
        interview_sink,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict to FRONTEND_URL once the front-end origin is configurable

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
