pub mod extract;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::llm_client::handlers as chat;
use crate::matching::handlers as matching;
use crate::resume::handlers as resume;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Job store
        .route(
            "/api/jobs",
            post(jobs::handle_create_job).get(jobs::handle_list_jobs),
        )
        .route("/api/jobs/:id", get(jobs::handle_get_job))
        // Resume intake
        .route(
            "/api/upload",
            post(resume::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Matching and skill gaps
        .route("/api/match", post(matching::handle_match))
        .route("/api/analyze", post(skills::handle_analyze))
        // LLM passthrough
        .route("/api/chat", post(chat::handle_chat))
        .with_state(state)
}
