use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::talent::store::TalentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Database collaborators. Default: `PgTalentStore`.
    pub store: Arc<dyn TalentStore>,
    pub config: Config,
}
