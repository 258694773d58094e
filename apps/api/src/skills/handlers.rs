use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::routes::extract::{present, LenientJson};
use crate::skills::gap::{analyze, SkillGapReport};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: Option<String>,
    /// Integer or numeric string. Takes precedence over `job_description`.
    #[serde(default, deserialize_with = "present")]
    pub job_id: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub job_description: Option<Value>,
}

/// POST /api/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    LenientJson(req): LenientJson<AnalyzeRequest>,
) -> Result<Json<SkillGapReport>, AppError> {
    let text = req
        .text
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Validation("Missing text to analyze".to_string()))?;

    let job_text = match (&req.job_id, &req.job_description) {
        (Some(raw_id), _) => match parse_job_id(raw_id) {
            Some(id) => state.jobs.get(id).await?.map(|job| job.description),
            None => {
                debug!("Ignoring unparseable job_id {raw_id}");
                None
            }
        },
        (None, Some(Value::String(description))) => Some(description.clone()),
        _ => None,
    };

    let report = analyze(&state.skills, &text, job_text.as_deref());
    Ok(Json(report))
}

/// Accepts `3`, `3.0`, and `"3"`. Anything else, or a non-positive id, is `None`.
fn parse_job_id(raw: &Value) -> Option<u64> {
    let id = match raw {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 1.0).map(|f| f.trunc() as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    id.filter(|id| *id > 0)
}
