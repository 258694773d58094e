use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::ProxyError;
use crate::matching::ranker::RankError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported file type")]
    UnsupportedFile,

    #[error("No jobs available for matching")]
    EmptyCorpus,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("LLM API not configured on server")]
    NotConfigured,

    #[error("Upstream error: {message}")]
    Upstream { message: String, details: String },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<RankError> for AppError {
    fn from(e: RankError) -> Self {
        match e {
            RankError::EmptyCorpus => AppError::EmptyCorpus,
            RankError::EmptyResume => AppError::Validation("Missing resume text".to_string()),
        }
    }
}

impl From<ProxyError> for AppError {
    fn from(e: ProxyError) -> Self {
        match e {
            ProxyError::NotConfigured => AppError::NotConfigured,
            ProxyError::Unreachable(details) => AppError::Upstream {
                message: "Failed to reach LLM provider".to_string(),
                details,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::UnsupportedFile | AppError::EmptyCorpus => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::NotConfigured => (StatusCode::NOT_IMPLEMENTED, self.to_string()),
            AppError::Upstream { message, details } => {
                tracing::warn!("Upstream error: {message}: {details}");
                let body = Json(json!({ "error": message, "details": details }));
                return (StatusCode::BAD_GATEWAY, body).into_response();
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
