//! Client for the external summarization service.
//!
//! The service accepts `{"text", "language"}` over an authenticated POST and
//! answers with a JSON object carrying a `summary` field. A call is made once
//! per request; failures are reported, never retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Summarization service settings.
#[derive(Clone)]
pub struct SummarizerConfig {
    /// Full endpoint URL.
    pub url: String,
    /// Bearer token sent with every request.
    pub api_key: String,
    /// Value of the `language` request field.
    pub language: String,
    /// Request timeout; `None` leaves the client default (no timeout).
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for SummarizerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummarizerConfig")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("language", &self.language)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Errors from a summarization call.
#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// Network failure or timeout.
    #[error("summarization request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("summarization service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON.
    #[error("malformed summarization response: {0}")]
    MalformedBody(String),

    /// The response carried no usable `summary`.
    #[error("summarization response has no summary")]
    MissingSummary,
}

/// Something that can turn note text into a summary.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError>;
}

#[derive(Debug, Serialize)]
struct SummaryRequest<'a> {
    text: &'a str,
    language: &'a str,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(default)]
    summary: Option<String>,
}

/// Summarizer calling the configured HTTPS endpoint.
#[derive(Debug, Clone)]
pub struct HttpSummarizer {
    client: Client,
    config: SummarizerConfig,
}

impl HttpSummarizer {
    pub fn new(config: SummarizerConfig) -> Result<Self, SummarizeError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SummarizeError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    #[instrument(skip(self, text), fields(url = %self.config.url, chars = text.len()))]
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        let response = self
            .client
            .post(&self.config.url)
            .bearer_auth(&self.config.api_key)
            .json(&SummaryRequest {
                text,
                language: &self.config.language,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: SummaryResponse = serde_json::from_slice(&bytes)
            .map_err(|e| SummarizeError::MalformedBody(e.to_string()))?;

        let summary = parsed
            .summary
            .filter(|s| !s.is_empty())
            .ok_or(SummarizeError::MissingSummary)?;

        debug!(summary_chars = summary.len(), "Summary received");
        Ok(summary)
    }
}
