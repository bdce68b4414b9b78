mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;
mod talent;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::talent::store::PgTalentStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("talent_match_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Talent Match API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let pool = create_pool(&config)?;
    let store = Arc::new(PgTalentStore::new(pool, config.database_timeout));

    // Initialize LLM client
    let llm = LlmClient::new(&config.ollama_url, &config.ollama_model, config.ollama_timeout)?;
    if llm.probe().await {
        info!("LLM server reachable at {} (model: {})", config.ollama_url, llm.model());
    } else {
        warn!(
            "LLM server not reachable at {}; profile drafting will be skipped until it is up",
            config.ollama_url
        );
    }

    // Build app state
    let state = AppState {
        llm,
        store,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
