use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::ranker::rank;
use crate::models::job::MatchResult;
use crate::routes::extract::LenientJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub results: Vec<MatchResult>,
}

/// POST /api/match
pub async fn handle_match(
    State(state): State<AppState>,
    LenientJson(req): LenientJson<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let text = req
        .text
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Validation("Missing resume text".to_string()))?;

    let jobs = state.jobs.list().await?;
    let results = rank(&text, &jobs)?;
    Ok(Json(MatchResponse { results }))
}
