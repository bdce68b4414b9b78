use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobLevel {
    Junior,
    #[default]
    Middle,
    Senior,
}

impl JobLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Junior, Self::Middle, Self::Senior]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Middle => "Middle",
            Self::Senior => "Senior",
        }
    }
}

/// The inputs of one talent-match run, as written to `talent_benchmarks`.
/// `benchmark_ids` is the raw comma-separated text the user typed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkRecord {
    pub role_name: String,
    pub job_level: JobLevel,
    pub role_purpose: String,
    pub benchmark_ids: String,
}
