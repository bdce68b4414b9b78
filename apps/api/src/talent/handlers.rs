//! Axum route handlers for the Talent Match API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::LlmDraft;
use crate::models::benchmark::{BenchmarkRecord, JobLevel};
use crate::state::AppState;
use crate::talent::options::{InputOptions, DEFAULT_ROLE_PURPOSE};
use crate::talent::runner::{
    draft_profile, load_input_options, run_talent_match, validate_record, RunWarning,
    TalentMatchReport,
};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RunRequest {
    pub role_name: String,
    #[serde(default)]
    pub job_level: JobLevel,
    #[serde(default = "default_role_purpose")]
    pub role_purpose: String,
    /// Comma-separated employee ids, exactly as typed.
    pub benchmark_ids: String,
}

fn default_role_purpose() -> String {
    DEFAULT_ROLE_PURPOSE.to_string()
}

impl From<RunRequest> for BenchmarkRecord {
    fn from(request: RunRequest) -> Self {
        BenchmarkRecord {
            role_name: request.role_name.trim().to_string(),
            job_level: request.job_level,
            role_purpose: request.role_purpose,
            benchmark_ids: request.benchmark_ids,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    #[serde(flatten)]
    pub options: InputOptions,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<RunWarning>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/talent-match/options
///
/// Role list (live catalogue or static fallback), job levels and input defaults.
pub async fn handle_get_options(State(state): State<AppState>) -> Json<OptionsResponse> {
    let (options, warning) = load_input_options(state.store.as_ref()).await;
    Json(OptionsResponse {
        options,
        warnings: warning.into_iter().collect(),
    })
}

/// POST /api/v1/talent-match/run
pub async fn handle_run(
    State(state): State<AppState>,
    Json(request): Json<RunRequest>,
) -> Result<Json<TalentMatchReport>, AppError> {
    let report = run_talent_match(state.store.as_ref(), &state.llm, request.into()).await?;
    Ok(Json(report))
}

/// POST /api/v1/talent-match/profile
///
/// Drafts the job profile alone. Unlike a full run, a drafting failure is an
/// error response here.
pub async fn handle_draft_profile(
    State(state): State<AppState>,
    Json(request): Json<RunRequest>,
) -> Result<Json<LlmDraft>, AppError> {
    let record: BenchmarkRecord = request.into();
    validate_record(&record)?;
    let draft = draft_profile(&state.llm, &record).await?;
    Ok(Json(draft))
}
