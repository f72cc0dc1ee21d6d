//! Health check endpoint.
//!
//! Reports whether the note store answers. The summarization service is
//! never contacted.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` or `unavailable`.
    pub status: &'static str,
    /// Server crate version.
    pub version: &'static str,
    /// `ok`, or the store error.
    pub store: String,
}

/// GET /health - 200 when the store answers, 503 otherwise.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let version = env!("CARGO_PKG_VERSION");

    match state.store().ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                version,
                store: "ok".to_string(),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Store ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                    version,
                    store: e.to_string(),
                }),
            )
        }
    }
}

/// Build health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use notepad_core::Note;
    use notepad_store::{MemoryNoteStore, NoteStore, StoreError, StoreResult};

    use super::*;
    use crate::summarizer::{SummarizeError, Summarizer};

    struct NoSummarizer;

    #[async_trait]
    impl Summarizer for NoSummarizer {
        async fn summarize(&self, _text: &str) -> Result<String, SummarizeError> {
            Err(SummarizeError::MissingSummary)
        }
    }

    struct DownStore;

    #[async_trait]
    impl NoteStore for DownStore {
        async fn insert(&self, _note: &Note) -> StoreResult<()> {
            Ok(())
        }

        async fn find_all(&self) -> StoreResult<Vec<Note>> {
            Ok(Vec::new())
        }

        async fn delete_one(&self, _title: &str) -> StoreResult<bool> {
            Ok(false)
        }

        async fn ping(&self) -> StoreResult<()> {
            Err(StoreError::ConfigError("connection refused".to_string()))
        }
    }

    fn state(store: Arc<dyn NoteStore>) -> State<AppState> {
        State(AppState::new(store, Arc::new(NoSummarizer)))
    }

    #[tokio::test]
    async fn test_health_check_ok() {
        let (status, Json(body)) = health_check(state(Arc::new(MemoryNoteStore::new()))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert_eq!(body.store, "ok");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_health_check_store_down() {
        let (status, Json(body)) = health_check(state(Arc::new(DownStore))).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "unavailable");
        assert_eq!(body.store, "configuration error: connection refused");
    }
}
