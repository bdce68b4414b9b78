//! Orchestration of one user-triggered talent-match run.
//!
//! Flow: record benchmark → run_talent_match → draft job profile →
//!       normalize → rank / breakdown / insight → return report.
//!
//! Benchmark recording and profile drafting are best-effort: their failures
//! become warnings on the report. A failed or empty match call, or a
//! malformed rate, aborts the run.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{LlmClient, LlmDraft};
use crate::models::benchmark::{BenchmarkRecord, JobLevel};
use crate::talent::dashboard::{build_dashboard, Dashboard};
use crate::talent::normalizer::normalize;
use crate::talent::options::{parse_benchmark_ids, InputOptions, RoleOptions};
use crate::talent::prompts::build_job_profile_prompt;
use crate::talent::store::TalentStore;
use crate::talent::TalentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    ConfigurationUnavailable,
    BenchmarkPersistence,
    ProfileDrafting,
    NoCandidates,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunWarning {
    pub kind: WarningKind,
    pub message: String,
}

impl RunWarning {
    fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Completed,
    NoCandidates,
}

#[derive(Debug, Serialize)]
pub struct TalentMatchReport {
    pub run_id: Uuid,
    pub role_name: String,
    pub job_level: JobLevel,
    pub benchmark_ids: Vec<String>,
    pub generated_at: DateTime<Utc>,
    pub status: RunStatus,
    pub benchmark_recorded: bool,
    pub profile: Option<LlmDraft>,
    pub dashboard: Option<Dashboard>,
    pub warnings: Vec<RunWarning>,
}

/// Validates the request and returns the parsed benchmark ids.
pub fn validate_record(record: &BenchmarkRecord) -> Result<Vec<String>, AppError> {
    if record.role_name.trim().is_empty() {
        return Err(AppError::Validation("role_name cannot be empty".to_string()));
    }

    let benchmark_ids = parse_benchmark_ids(&record.benchmark_ids);
    if benchmark_ids.is_empty() {
        return Err(AppError::Validation(
            "benchmark_ids must contain at least one employee id".to_string(),
        ));
    }

    Ok(benchmark_ids)
}

/// Role list for the input panel, falling back to the static list when the
/// catalogue cannot be read.
pub async fn load_input_options(
    store: &dyn TalentStore,
) -> (InputOptions, Option<RunWarning>) {
    match store.list_roles().await {
        Ok(names) => (InputOptions::new(RoleOptions::from_catalogue(names)), None),
        Err(e) => {
            warn!("Role catalogue unavailable, using fallback roles: {e}");
            let warning = RunWarning::new(
                WarningKind::ConfigurationUnavailable,
                format!("Unable to load roles, using defaults: {e}"),
            );
            (InputOptions::new(RoleOptions::fallback()), Some(warning))
        }
    }
}

/// Drafts a job profile for the request. Errors are returned to the caller.
pub async fn draft_profile(
    llm: &LlmClient,
    record: &BenchmarkRecord,
) -> Result<LlmDraft, AppError> {
    let prompt = build_job_profile_prompt(record);
    Ok(llm.generate(&prompt).await?)
}

pub async fn run_talent_match(
    store: &dyn TalentStore,
    llm: &LlmClient,
    record: BenchmarkRecord,
) -> Result<TalentMatchReport, AppError> {
    let benchmark_ids = validate_record(&record)?;
    let run_id = Uuid::new_v4();
    let mut warnings = Vec::new();

    info!(
        %run_id,
        role = %record.role_name,
        job_level = record.job_level.label(),
        benchmarks = benchmark_ids.len(),
        "Running talent match"
    );

    // 1. Record the request; never blocks the run
    let benchmark_recorded = match store.record_benchmark(&record).await {
        Ok(()) => true,
        Err(e) => {
            warn!(%run_id, "Unable to insert benchmark record: {e}");
            warnings.push(RunWarning::new(
                WarningKind::BenchmarkPersistence,
                format!("Unable to insert benchmark record: {e}"),
            ));
            false
        }
    };

    // 2. Remote computation
    let raw_rows = store
        .run_talent_match(&benchmark_ids)
        .await
        .map_err(|e| TalentError::RemoteService(e.to_string()))?;
    if raw_rows.is_empty() {
        return Err(TalentError::RemoteService(
            "no data retrieved; check the function or its parameters".to_string(),
        )
        .into());
    }
    info!(%run_id, rows = raw_rows.len(), "Talent match computed");

    // 3. Job profile draft, side by side with the scores
    let profile = match draft_profile(llm, &record).await {
        Ok(draft) => Some(draft),
        Err(e) => {
            warn!(%run_id, "Skipping AI generation: {e}");
            warnings.push(RunWarning::new(
                WarningKind::ProfileDrafting,
                format!("Skipping AI generation: {e}"),
            ));
            None
        }
    };

    // 4. Shape the rows
    let (status, dashboard) = match normalize(raw_rows, &record.role_name) {
        Ok(rows) => {
            let dashboard = build_dashboard(record.role_name.trim(), &rows)?;
            info!(
                %run_id,
                candidates = dashboard.ranked.len(),
                top = %dashboard.insight.insight.top_candidate.full_name,
                "Talent match dashboard ready"
            );
            (RunStatus::Completed, Some(dashboard))
        }
        Err(TalentError::NoCandidates { role }) => {
            warn!(%run_id, role = %role, "No candidates for role");
            warnings.push(RunWarning::new(
                WarningKind::NoCandidates,
                format!("No candidates with role '{role}' found."),
            ));
            (RunStatus::NoCandidates, None)
        }
        Err(e) => return Err(e.into()),
    };

    Ok(TalentMatchReport {
        run_id,
        role_name: record.role_name,
        job_level: record.job_level,
        benchmark_ids,
        generated_at: Utc::now(),
        status,
        benchmark_recorded,
        profile,
        dashboard,
        warnings,
    })
}
