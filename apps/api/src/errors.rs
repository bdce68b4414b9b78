use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::talent::TalentError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Messages always carry the underlying detail so failures can be diagnosed
/// from the dashboard.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    RemoteService(String),

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Profile drafting failed: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<TalentError> for AppError {
    fn from(err: TalentError) -> Self {
        match err {
            TalentError::RemoteService(_) => AppError::RemoteService(err.to_string()),
            TalentError::DataIntegrity { .. } => AppError::DataIntegrity(err.to_string()),
            // Both are settled inside the runner; reaching here is a bug.
            TalentError::NoCandidates { .. } | TalentError::EmptyResult => {
                AppError::Internal(anyhow::Error::new(err))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::RemoteService(msg) => {
                tracing::error!("Remote service error: {msg}");
                (StatusCode::BAD_GATEWAY, "REMOTE_SERVICE_ERROR")
            }
            AppError::DataIntegrity(msg) => {
                tracing::error!("Data integrity error: {msg}");
                (StatusCode::BAD_GATEWAY, "DATA_INTEGRITY_ERROR")
            }
            AppError::Llm(e) => {
                tracing::warn!("LLM error: {e}");
                (StatusCode::BAD_GATEWAY, "LLM_ERROR")
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string()
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_talent_errors_map_to_gateway_and_keep_detail() {
        let remote: AppError = TalentError::RemoteService("connection refused".to_string()).into();
        assert!(matches!(remote, AppError::RemoteService(_)));
        assert!(remote.to_string().contains("connection refused"));
        assert_eq!(remote.into_response().status(), StatusCode::BAD_GATEWAY);

        let integrity: AppError = TalentError::DataIntegrity {
            row: 3,
            field: "out_final_match_rate",
            value: "\"abc\"".to_string(),
        }
        .into();
        assert!(integrity.to_string().contains("out_final_match_rate"));
        assert_eq!(integrity.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_empty_result_is_internal() {
        let err: AppError = TalentError::EmptyResult.into();
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_escaped_no_candidates_is_internal_not_not_found() {
        let err: AppError = TalentError::NoCandidates {
            role: "Brand Executive".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Internal(_)));
        assert!(err.to_string().contains("Brand Executive"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_is_bad_request() {
        let err = AppError::Validation("benchmark_ids cannot be empty".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
