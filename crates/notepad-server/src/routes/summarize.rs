//! Summarization route.
//!
//! POST /api/summarize forwards note text to the summarization service and
//! returns its summary. Nothing is read from or written to the note store.

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::extract::JsonBody;
use crate::state::AppState;

pub const CONTENT_REQUIRED: &str = "Note content is required!";

/// Request body for POST /api/summarize.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    #[serde(default)]
    pub note_content: Option<String>,
}

/// Response for POST /api/summarize.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// POST /api/summarize - Summarize note text.
///
/// # Response
///
/// - 200 OK: `{"summary": "..."}`
/// - 400 Bad Request: `noteContent` missing or empty
/// - 500 Internal Server Error: the summarization call failed
async fn summarize_note(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SummarizeRequest>,
) -> ApiResult<Json<SummarizeResponse>> {
    let content = match request.note_content {
        Some(content) if !content.is_empty() => content,
        _ => return Err(ApiError::bad_request(CONTENT_REQUIRED)),
    };

    let summary = state.summarizer().summarize(&content).await.map_err(|e| {
        tracing::error!(error = %e, "Summarization failed");
        ApiError::from(e)
    })?;

    Ok(Json(SummarizeResponse { summary }))
}

/// Build summarization routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/summarize", post(summarize_note))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case() {
        let request: SummarizeRequest =
            serde_json::from_str(r#"{"noteContent": "some text"}"#).unwrap();
        assert_eq!(request.note_content.as_deref(), Some("some text"));

        let request: SummarizeRequest =
            serde_json::from_str(r#"{"note_content": "ignored"}"#).unwrap();
        assert!(request.note_content.is_none());
    }
}
