use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::{ProxyBody, ProxyError};
use crate::state::AppState;

/// POST /api/chat
/// Relays the JSON body to the configured LLM provider.
pub async fn handle_chat(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    if !state.llm.is_configured() {
        return Err(ProxyError::NotConfigured.into());
    }

    let payload: Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::Validation(format!("Request body must be valid JSON: {e}")))?;

    let reply = state.llm.forward(&payload).await?;
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);

    Ok(match reply.body {
        ProxyBody::Json(json) => (status, Json(json)).into_response(),
        ProxyBody::Text(text) => (status, text).into_response(),
    })
}
