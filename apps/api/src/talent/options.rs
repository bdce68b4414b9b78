use serde::Serialize;

use crate::models::benchmark::JobLevel;

/// Roles offered when `dim_positions` cannot be read.
pub const FALLBACK_ROLES: [&str; 4] = ["Data Analyst", "HRBP", "Brand Executive", "Sales Supervisor"];

pub const DEFAULT_ROLE_PURPOSE: &str = "Analyze and visualize data for business decision-making.";
pub const DEFAULT_BENCHMARK_IDS: &str = "312, 335, 175";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleSource {
    Catalogue,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleOptions {
    pub roles: Vec<String>,
    pub source: RoleSource,
}

impl RoleOptions {
    pub fn fallback() -> Self {
        RoleOptions {
            roles: FALLBACK_ROLES.iter().map(|r| r.to_string()).collect(),
            source: RoleSource::Fallback,
        }
    }

    /// Sorted, non-blank role names from the catalogue; an empty catalogue
    /// is treated like an unreachable one.
    pub fn from_catalogue(names: Vec<Option<String>>) -> Self {
        let mut roles: Vec<String> = names
            .into_iter()
            .flatten()
            .filter(|name| !name.trim().is_empty())
            .collect();

        if roles.is_empty() {
            return Self::fallback();
        }

        roles.sort();
        RoleOptions {
            roles,
            source: RoleSource::Catalogue,
        }
    }
}

/// Everything the input panel needs to render its controls.
#[derive(Debug, Clone, Serialize)]
pub struct InputOptions {
    pub roles: Vec<String>,
    pub role_source: RoleSource,
    pub job_levels: Vec<JobLevel>,
    pub default_job_level: JobLevel,
    pub default_role_purpose: &'static str,
    pub default_benchmark_ids: &'static str,
}

impl InputOptions {
    pub fn new(roles: RoleOptions) -> Self {
        InputOptions {
            roles: roles.roles,
            role_source: roles.source,
            job_levels: JobLevel::ordered().to_vec(),
            default_job_level: JobLevel::default(),
            default_role_purpose: DEFAULT_ROLE_PURPOSE,
            default_benchmark_ids: DEFAULT_BENCHMARK_IDS,
        }
    }
}

/// Splits comma-separated benchmark ids, trimming each and skipping blanks.
pub fn parse_benchmark_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
