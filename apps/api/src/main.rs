mod config;
mod errors;
mod jobs;
mod llm_client;
mod matching;
mod models;
mod resume;
mod routes;
mod skills;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::store::JobStore;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::skills::extractor::SkillMatcher;
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

    info!("Starting JobMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Job store (JSON file, rewritten on every addition)
    let jobs = Arc::new(JobStore::new(config.jobs_file()));
    info!("Job store at {}", jobs.path().display());

    // Skill extractor strategy — linguistic by default, regex via SKILL_EXTRACTOR=basic
    let skills = Arc::new(SkillMatcher::from_config(
        config.skill_extractor,
        config.skill_max_text_chars,
    ));
    info!("Skill extractor: {}", skills.backend());

    // LLM passthrough
    let llm = LlmClient::new(
        config.llm_api_url.clone(),
        config.llm_api_key.clone(),
        config.llm_timeout_secs,
    )?;
    if llm.is_configured() {
        info!("LLM proxy enabled (timeout {}s)", config.llm_timeout_secs);
    } else {
        info!("LLM proxy disabled: LLM_API_URL not set");
    }

    info!("Uploads saved under {}", config.upload_dir.display());

    // Build app state
    let state = AppState {
        jobs,
        skills,
        llm,
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
