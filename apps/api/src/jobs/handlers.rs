use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::job::Job;
use crate::routes::extract::LenientJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// POST /api/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    LenientJson(req): LenientJson<CreateJobRequest>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    let description = req
        .description
        .ok_or_else(|| AppError::Validation("Missing description".to_string()))?;

    let job = state.jobs.add(req.title, description).await?;
    info!("Created job {} ({})", job.id, job.title);
    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Result<Json<Vec<Job>>, AppError> {
    Ok(Json(state.jobs.list().await?))
}

/// GET /api/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Job>, AppError> {
    state
        .jobs
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}
