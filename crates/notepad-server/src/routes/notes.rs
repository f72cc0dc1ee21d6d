//! Note routes.
//!
//! - GET /api/notes - List every stored note
//! - POST /api/notes - Create a note
//! - DELETE /api/notes - Delete the first note with a given title

use axum::{Json, Router, extract::State, routing::get};
use serde::Deserialize;

use notepad_core::{Note, NoteDraft, require_title, validate_new_note};

use crate::error::{ApiError, ApiResult};
use crate::extract::JsonBody;
use crate::routes::MessageResponse;
use crate::state::AppState;

pub const NOTE_ADDED: &str = "Note added successfully!";
pub const NOTE_DELETED: &str = "Note deleted successfully!";

/// Request body for DELETE /api/notes.
#[derive(Debug, Deserialize)]
pub struct DeleteNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
}

/// GET /api/notes - List every stored note in insertion order.
///
/// # Response
///
/// - 200 OK: `[{"title", "content", "note_list", "summary"}, ...]`
/// - 500 Internal Server Error: store failure
async fn list_notes(State(state): State<AppState>) -> ApiResult<Json<Vec<Note>>> {
    let notes = state
        .store()
        .find_all()
        .await
        .map_err(ApiError::store("Error fetching notes!"))?;

    tracing::debug!(count = notes.len(), "Listed notes");
    Ok(Json(notes))
}

/// POST /api/notes - Create a note.
///
/// # Response
///
/// - 200 OK: `{"message": "Note added successfully!"}`
/// - 400 Bad Request: title missing or empty
/// - 500 Internal Server Error: store failure, with `error` detail
async fn create_note(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<NoteDraft>,
) -> ApiResult<Json<MessageResponse>> {
    let note = validate_new_note(draft)?.into_note();

    state
        .store()
        .insert(&note)
        .await
        .map_err(ApiError::store("Error saving note!"))?;

    tracing::info!(title = %note.title, "Note added");
    Ok(Json(MessageResponse::new(NOTE_ADDED)))
}

/// DELETE /api/notes - Delete the first note whose title matches exactly.
///
/// Succeeds whether or not anything matched.
///
/// # Response
///
/// - 200 OK: `{"message": "Note deleted successfully!"}`
/// - 400 Bad Request: title missing or empty
async fn delete_note(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<DeleteNoteRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let title = require_title(request.title)?;

    let removed = state
        .store()
        .delete_one(&title)
        .await
        .map_err(ApiError::store("Error deleting note!"))?;

    tracing::info!(%title, removed, "Note delete requested");
    Ok(Json(MessageResponse::new(NOTE_DELETED)))
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/api/notes",
        get(list_notes).post(create_note).delete(delete_note),
    )
}
