//! notepad-core: Core types and validation for the notepad service
//!
//! This crate provides:
//! - The persisted `Note` document and its reserved `NoteItem` sub-entity
//! - The single boundary validation step turning a raw request into a `NewNote`

pub mod types;
pub mod validation;

pub use types::{NewNote, Note, NoteItem};
pub use validation::{
    FieldError, NoteDraft, TITLE_REQUIRED, ValidationErrors, require_title, validate_new_note,
};
