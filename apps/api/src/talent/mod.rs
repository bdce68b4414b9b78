// Talent Match engine.
// The scores themselves come from the `run_talent_match` database function;
// this module normalizes, ranks and summarizes what it returns.

pub mod aggregator;
pub mod breakdown;
pub mod dashboard;
pub mod handlers;
pub mod insights;
pub mod normalizer;
pub mod options;
pub mod prompts;
pub mod runner;
pub mod store;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TalentError {
    #[error("Talent match service failed: {0}")]
    RemoteService(String),

    #[error("Row {row}: {field} value {value} is not valid")]
    DataIntegrity {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("No candidates found for role '{role}'")]
    NoCandidates { role: String },

    #[error("Insight requested for an empty ranking")]
    EmptyResult,
}
