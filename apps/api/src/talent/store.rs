//! Database collaborators of a talent-match run.
//!
//! `AppState` holds an `Arc<dyn TalentStore>`; `PgTalentStore` talks to the
//! Postgres instance hosting `dim_positions`, `talent_benchmarks` and the
//! `run_talent_match` function.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::models::benchmark::BenchmarkRecord;
use crate::models::match_row::RawMatchRow;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Unexpected row shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Database call timed out after {0:?}")]
    Timeout(Duration),
}

#[async_trait]
pub trait TalentStore: Send + Sync {
    /// Raw position names; nulls are passed through for the caller to skip.
    async fn list_roles(&self) -> Result<Vec<Option<String>>, StoreError>;

    async fn record_benchmark(&self, record: &BenchmarkRecord) -> Result<(), StoreError>;

    async fn run_talent_match(&self, benchmark_ids: &[String])
        -> Result<Vec<RawMatchRow>, StoreError>;
}

pub struct PgTalentStore {
    pool: PgPool,
    timeout: Duration,
}

impl PgTalentStore {
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    async fn bounded<T, F>(&self, call: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| StoreError::Timeout(self.timeout))?
            .map_err(StoreError::from)
    }
}

#[async_trait]
impl TalentStore for PgTalentStore {
    async fn list_roles(&self) -> Result<Vec<Option<String>>, StoreError> {
        self.bounded(
            sqlx::query_scalar::<_, Option<String>>("SELECT name FROM dim_positions")
                .fetch_all(&self.pool),
        )
        .await
    }

    async fn record_benchmark(&self, record: &BenchmarkRecord) -> Result<(), StoreError> {
        self.bounded(
            sqlx::query(
                r#"
                INSERT INTO talent_benchmarks (role_name, job_level, role_purpose, benchmark_ids)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(&record.role_name)
            .bind(record.job_level.label())
            .bind(&record.role_purpose)
            .bind(&record.benchmark_ids)
            .execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    async fn run_talent_match(
        &self,
        benchmark_ids: &[String],
    ) -> Result<Vec<RawMatchRow>, StoreError> {
        // Rows travel as JSON so mixed column types reach the normalizer untouched.
        let rows: Vec<serde_json::Value> = self
            .bounded(
                sqlx::query_scalar::<_, serde_json::Value>(
                    "SELECT to_jsonb(t) FROM run_talent_match(benchmark_ids => $1) AS t",
                )
                .bind(benchmark_ids)
                .fetch_all(&self.pool),
            )
            .await?;

        rows.into_iter()
            .map(|row| serde_json::from_value(row).map_err(StoreError::from))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use std::sync::Mutex;

    use super::*;

    /// In-memory store; `None` in a slot makes the corresponding call fail.
    #[derive(Default)]
    pub(crate) struct InMemoryTalentStore {
        pub(crate) roles: Option<Vec<Option<String>>>,
        pub(crate) match_rows: Option<Vec<serde_json::Value>>,
        pub(crate) reject_benchmarks: bool,
        pub(crate) recorded: Mutex<Vec<BenchmarkRecord>>,
        pub(crate) requested_ids: Mutex<Vec<Vec<String>>>,
    }

    fn unavailable() -> StoreError {
        StoreError::Database(sqlx::Error::PoolTimedOut)
    }

    #[async_trait]
    impl TalentStore for InMemoryTalentStore {
        async fn list_roles(&self) -> Result<Vec<Option<String>>, StoreError> {
            self.roles.clone().ok_or_else(unavailable)
        }

        async fn record_benchmark(&self, record: &BenchmarkRecord) -> Result<(), StoreError> {
            if self.reject_benchmarks {
                return Err(unavailable());
            }
            self.recorded
                .lock()
                .expect("store mutex poisoned")
                .push(record.clone());
            Ok(())
        }

        async fn run_talent_match(
            &self,
            benchmark_ids: &[String],
        ) -> Result<Vec<RawMatchRow>, StoreError> {
            self.requested_ids
                .lock()
                .expect("store mutex poisoned")
                .push(benchmark_ids.to_vec());
            let rows = self.match_rows.clone().ok_or_else(unavailable)?;
            rows.into_iter()
                .map(|row| serde_json::from_value(row).map_err(StoreError::from))
                .collect()
        }
    }
}
