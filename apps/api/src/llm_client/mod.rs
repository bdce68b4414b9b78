/// LLM client: the single point of entry for calls to the local inference server.
///
/// Talks to an Ollama-compatible `/api/generate` endpoint with streaming
/// disabled. Calls are never retried: profile drafting is optional and a
/// failure is reported to the caller as-is.
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GENERATE_PATH: &str = "/api/generate";
/// Reachability checks never wait for the generation timeout.
const PROBE_TIMEOUT: Duration = Duration::from_secs(3);
/// Text used when the server answers without a `response` field.
pub const EMPTY_RESPONSE_TEXT: &str = "No response from model.";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

/// A drafted text together with the model that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LlmDraft {
    pub model: String,
    pub content: String,
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
    model: String,
}

impl LlmClient {
    pub fn new(base_url: &str, model: &str, timeout: Duration) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns true if anything answers HTTP at the server root.
    pub async fn probe(&self) -> bool {
        self.client
            .get(&self.base_url)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
            .is_ok()
    }

    /// Sends one non-streaming generation request and returns the text.
    pub async fn generate(&self, prompt: &str) -> Result<LlmDraft, LlmError> {
        let request_body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}{}", self.base_url, GENERATE_PATH))
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let content = parse_generate_body(&body)?;
        debug!(model = %self.model, chars = content.len(), "LLM generate call succeeded");

        Ok(LlmDraft {
            model: self.model.clone(),
            content,
        })
    }
}

fn parse_generate_body(body: &str) -> Result<String, LlmError> {
    let parsed: GenerateResponse = serde_json::from_str(body)?;
    Ok(parsed
        .response
        .unwrap_or_else(|| EMPTY_RESPONSE_TEXT.to_string()))
}
