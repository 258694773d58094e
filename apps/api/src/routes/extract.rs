use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON body extractor that ignores the `Content-Type` header.
///
/// Clients of this API post JSON with arbitrary or missing content types, so
/// the body is always parsed as JSON. Failures become `400` with the usual
/// `{"error": ...}` body instead of axum's plain-text rejections.
pub struct LenientJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(LenientJson)
            .map_err(|e| AppError::Validation(format!("Request body must be valid JSON: {e}")))
    }
}

/// Deserializes a present field as `Some`, even when its value is `null`.
/// Paired with `#[serde(default)]` so an absent field stays `None`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
