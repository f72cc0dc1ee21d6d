//! Request validation at the service boundary.
//!
//! Handlers deserialize bodies into loosely typed drafts and hand them to
//! [`validate_new_note`], which either returns a clean [`NewNote`] or every
//! field problem it found.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::NewNote;

/// Message reported when a title is missing or empty.
pub const TITLE_REQUIRED: &str = "Title is required!";

/// Unvalidated note creation input as it arrives over the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All field errors collected for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    /// Message of the first failing field, used as the response message.
    pub fn first_message(&self) -> &str {
        self.0
            .first()
            .map(|e| e.message.as_str())
            .unwrap_or("invalid request")
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate a note creation draft.
///
/// Only presence is checked: the title must exist and be non-empty. A title
/// consisting of whitespace is accepted as-is. Missing content becomes an
/// empty string.
pub fn validate_new_note(draft: NoteDraft) -> Result<NewNote, ValidationErrors> {
    let title = require_title(draft.title)?;

    Ok(NewNote {
        title,
        content: draft.content.unwrap_or_default(),
    })
}

/// Check that a title used as a lookup key is present and non-empty.
pub fn require_title(title: Option<String>) -> Result<String, ValidationErrors> {
    match title {
        Some(title) if !title.is_empty() => Ok(title),
        _ => Err(ValidationErrors(vec![FieldError {
            field: "title",
            message: TITLE_REQUIRED.to_string(),
        }])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: Option<&str>, content: Option<&str>) -> NoteDraft {
        NoteDraft {
            title: title.map(str::to_string),
            content: content.map(str::to_string),
        }
    }

    #[test]
    fn accepts_title_and_content() {
        let note = validate_new_note(draft(Some("Groceries"), Some("milk, eggs"))).unwrap();
        assert_eq!(note.title(), "Groceries");
        assert_eq!(note.content(), "milk, eggs");
    }

    #[test]
    fn missing_content_defaults_to_empty() {
        let note = validate_new_note(draft(Some("Groceries"), None)).unwrap();
        assert_eq!(note.content(), "");
    }

    #[test]
    fn rejects_missing_title() {
        let err = validate_new_note(draft(None, Some("body"))).unwrap_err();
        assert_eq!(err.fields().len(), 1);
        assert_eq!(err.fields()[0].field, "title");
        assert_eq!(err.first_message(), TITLE_REQUIRED);
    }

    #[test]
    fn rejects_empty_title() {
        let err = validate_new_note(draft(Some(""), None)).unwrap_err();
        assert_eq!(err.first_message(), TITLE_REQUIRED);
    }

    #[test]
    fn whitespace_title_is_accepted() {
        let note = validate_new_note(draft(Some("  "), None)).unwrap();
        assert_eq!(note.title(), "  ");
    }

    #[test]
    fn draft_deserializes_null_title() {
        let d: NoteDraft = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert!(d.title.is_none());
        assert!(validate_new_note(d).is_err());
    }

    #[test]
    fn require_title_checks_presence() {
        assert_eq!(require_title(Some("a".into())).unwrap(), "a");
        assert!(require_title(Some(String::new())).is_err());
        assert!(require_title(None).is_err());
    }

    #[test]
    fn errors_display_field_and_message() {
        let err = validate_new_note(draft(None, None)).unwrap_err();
        assert_eq!(err.to_string(), "title: Title is required!");
    }
}
