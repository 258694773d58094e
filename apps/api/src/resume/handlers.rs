use std::path::{Path, PathBuf};

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use anyhow::Context;
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::resume::text_extractor::extract_text;
use crate::resume::upload::{allowed_extension, sanitize_filename};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub text: String,
}

/// POST /api/upload
/// Saves the `file` part under the upload directory and returns its text.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    let mut multipart = multipart.map_err(|e| {
        debug!("Upload without multipart body: {e}");
        AppError::Validation("No file part".to_string())
    })?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(AppError::Validation("No selected file".to_string()));
        }
        let ext = allowed_extension(&filename).ok_or(AppError::UnsupportedFile)?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        let name = sanitize_filename(&filename, &ext);
        let path = save_upload(&state.config.upload_dir, &name, &bytes).await?;
        let text = extract_text(path).await;
        return Ok(Json(UploadResponse { text }));
    }

    Err(AppError::Validation("No file part".to_string()))
}

async fn save_upload(dir: &Path, name: &str, bytes: &[u8]) -> anyhow::Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create upload dir {}", dir.display()))?;
    let path = dir.join(name);
    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("Failed to save upload {}", path.display()))?;
    info!("Saved upload {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}
