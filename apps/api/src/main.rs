mod config;
mod errors;
mod extraction;
mod llm_client;
mod routes;
mod state;
mod tagging;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::JobExtractor;
use crate::routes::build_router;
use crate::state::AppState;
use crate::tagging::TagGenerator;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Tagger API v{}", env!("CARGO_PKG_VERSION"));

    let extractor = JobExtractor::new(Duration::from_secs(config.fetch_timeout_secs))?;
    info!(
        "Job extractor initialized (timeout: {}s)",
        config.fetch_timeout_secs
    );

    info!(
        "Model credential available: {}",
        config.credential_available()
    );

    // Without a credential the API still serves /health, /status and /extract.
    let generator = match TagGenerator::from_config(&config) {
        Ok(generator) => {
            info!("LLM client initialized (model: {})", generator.model_name());
            Some(Arc::new(generator))
        }
        Err(e) => {
            warn!("Tag generation disabled: {e}");
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        extractor,
        generator,
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
