use std::sync::Arc;

use crate::config::Config;
use crate::jobs::store::JobStore;
use crate::llm_client::LlmClient;
use crate::skills::extractor::SkillMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<JobStore>,
    /// Skill extraction strategy, chosen once at startup via SKILL_EXTRACTOR.
    pub skills: Arc<SkillMatcher>,
    pub llm: LlmClient,
    pub config: Config,
}
