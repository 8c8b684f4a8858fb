mod auth;
mod config;
mod db;
mod endorsements;
mod errors;
mod llm_client;
mod models;
mod ranking;
mod routes;
mod state;
mod storage;
mod talents;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::{LlmClient, LlmSettings};
use crate::ranking::{SkillRecommender, TalentScorer};
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::PgStorage;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Talent API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let pool = create_pool(&config.database_url).await?;
    let store = Arc::new(PgStorage::new(pool));

    // One generation client shared by scoring and recommendations
    let llm = Arc::new(LlmClient::new(LlmSettings::from_config(&config))?);
    info!("LLM client initialized (model: {})", llm.model());

    let deadline = Duration::from_secs(config.llm_deadline_secs);
    let state = AppState {
        store,
        scorer: TalentScorer::new(llm.clone(), deadline),
        recommender: SkillRecommender::new(llm, deadline),
        ranking_concurrency: config.ranking_concurrency.max(1),
    };
    info!(
        "Batch ranking concurrency: {}",
        state.ranking_concurrency
    );

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
