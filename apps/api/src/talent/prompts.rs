// Prompt for the job-profile draft produced by the local model.

use crate::models::benchmark::BenchmarkRecord;

/// Profile drafting prompt template. Replace the `{...}` slots before sending.
pub const JOB_PROFILE_PROMPT_TEMPLATE: &str = "You are an HR analyst AI. Based on this role info:
Role: {role_name}
Level: {job_level}
Purpose: {role_purpose}
Benchmarks: {benchmark_ids}

Generate:
1. Key job requirements
2. Role description
3. Competency highlights";

pub fn build_job_profile_prompt(record: &BenchmarkRecord) -> String {
    JOB_PROFILE_PROMPT_TEMPLATE
        .replace("{role_name}", &record.role_name)
        .replace("{job_level}", record.job_level.label())
        .replace("{role_purpose}", &record.role_purpose)
        .replace("{benchmark_ids}", &record.benchmark_ids)
}
