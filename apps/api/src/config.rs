use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::skills::extractor::ExtractorMode;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SKILL_MAX_TEXT_CHARS: usize = 1_000_000;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory holding `jobs.json`.
    pub data_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    /// Upstream for `/api/chat`. `None` means the proxy is disabled.
    pub llm_api_url: Option<String>,
    pub llm_api_key: Option<String>,
    pub llm_timeout_secs: u64,
    pub skill_extractor: ExtractorMode,
    pub skill_max_text_chars: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let skill_extractor = match optional_env("SKILL_EXTRACTOR") {
            Some(raw) => raw.parse::<ExtractorMode>()?,
            None => ExtractorMode::Linguistic,
        };

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            data_dir: PathBuf::from(optional_env("DATA_DIR").unwrap_or_else(|| "data".into())),
            upload_dir: PathBuf::from(
                optional_env("UPLOAD_DIR").unwrap_or_else(|| "uploads".into()),
            ),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            llm_api_url: optional_env("LLM_API_URL"),
            llm_api_key: optional_env("LLM_API_KEY"),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", DEFAULT_LLM_TIMEOUT_SECS)?,
            skill_extractor,
            skill_max_text_chars: parse_env("SKILL_MAX_TEXT_CHARS", DEFAULT_SKILL_MAX_TEXT_CHARS)?,
        })
    }

    pub fn jobs_file(&self) -> PathBuf {
        self.data_dir.join("jobs.json")
    }
}

/// Reads an env var, treating unset and blank values alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

impl FromStr for ExtractorMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "linguistic" => Ok(ExtractorMode::Linguistic),
            "basic" | "regex" => Ok(ExtractorMode::Basic),
            other => bail!("SKILL_EXTRACTOR must be 'linguistic' or 'basic', got '{other}'"),
        }
    }
}
