//! Application state shared across handlers.

use std::sync::Arc;

use notepad_store::NoteStore;

use crate::summarizer::Summarizer;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
/// Both collaborators are trait objects so tests can swap in an in-memory
/// store or a canned summarizer.
#[derive(Clone)]
pub struct AppState {
    /// Note store.
    store: Arc<dyn NoteStore>,
    /// Summarization service client.
    summarizer: Arc<dyn Summarizer>,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: Arc<dyn NoteStore>, summarizer: Arc<dyn Summarizer>) -> Self {
        Self { store, summarizer }
    }

    /// Get a reference to the note store.
    pub fn store(&self) -> &dyn NoteStore {
        self.store.as_ref()
    }

    /// Get a reference to the summarization client.
    pub fn summarizer(&self) -> &dyn Summarizer {
        self.summarizer.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
