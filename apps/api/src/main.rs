mod advisor;
mod assessment;
mod config;
mod dashboard;
mod errors;
mod inflight;
mod models;
mod profile;
mod random;
mod recommendations;
mod resume;
mod routes;
mod skill_gap;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advisor::{ChatService, ReplyDelay};
use crate::config::Config;
use crate::profile::ProfileStore;
use crate::random::StdRandom;
use crate::recommendations::scorer::RuleBasedScorer;
use crate::resume::ResumeService;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::FileStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerBuddy API v{}", env!("CARGO_PKG_VERSION"));

    // Profile storage
    let backend = Arc::new(FileStore::open(config.storage_dir.clone()).await?);
    info!("Key-value store at {}", config.storage_dir.display());
    let profiles = ProfileStore::load(backend).await?;

    let rng = StdRandom::from_seed_option(config.rng_seed);
    if let Some(seed) = config.rng_seed {
        info!("Random source seeded with {seed}");
    }

    let chat = ChatService::new(ReplyDelay {
        min_ms: config.chat_delay_min_ms,
        max_ms: config.chat_delay_max_ms,
    });
    let resume = ResumeService::new(Duration::from_millis(config.resume_delay_ms));

    let state = AppState {
        config: config.clone(),
        profiles: Arc::new(profiles),
        chat: Arc::new(chat),
        resume: Arc::new(resume),
        scorer: Arc::new(RuleBasedScorer),
        rng: Arc::new(rng),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // single local user; no origin restrictions

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
