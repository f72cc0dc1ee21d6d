//! Route definitions for the HTTP API.

pub mod health;
pub mod notes;
pub mod summarize;

use axum::Router;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Body of every plain acknowledgement response.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(notes::routes())
        .merge(summarize::routes())
        .with_state(state)
}
