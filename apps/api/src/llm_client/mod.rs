/// LLM Client — forwards chat requests to the configured upstream provider.
///
/// The server only relays: the JSON body goes upstream unchanged, the API key
/// is injected as a bearer token, and the upstream status and body come back
/// as-is. One attempt, fixed timeout, no retries.
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub mod handlers;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("LLM API not configured on server")]
    NotConfigured,

    #[error("Failed to reach LLM provider: {0}")]
    Unreachable(String),
}

/// Upstream response body: parsed JSON when possible, raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum ProxyBody {
    Json(Value),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProxyReply {
    pub status: u16,
    pub body: ProxyBody,
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: Option<String>,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new(api_url: Option<String>, api_key: Option<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_url.is_some()
    }

    /// Posts `payload` upstream and relays whatever comes back.
    /// Non-2xx upstream statuses are replies, not errors.
    pub async fn forward(&self, payload: &Value) -> Result<ProxyReply, ProxyError> {
        let url = self.api_url.as_deref().ok_or(ProxyError::NotConfigured)?;

        let mut request = self
            .client
            .post(url)
            .header("content-type", "application/json")
            .json(payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            warn!("LLM provider unreachable: {e}");
            ProxyError::Unreachable(e.to_string())
        })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| {
            warn!("LLM provider response interrupted: {e}");
            ProxyError::Unreachable(e.to_string())
        })?;
        debug!("LLM provider replied {status} ({} bytes)", text.len());

        let body = match serde_json::from_str::<Value>(&text) {
            Ok(json) => ProxyBody::Json(json),
            Err(_) => ProxyBody::Text(text),
        };
        Ok(ProxyReply { status, body })
    }
}
