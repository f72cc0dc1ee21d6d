//! Core data types for the notepad service.
//!
//! A `Note` is stored as a single document. Every field is always present in
//! its serialized form so that readers never have to guess which variant of
//! the document they are looking at.

use serde::{Deserialize, Serialize};

// ============================================================================
// Note
// ============================================================================

/// A stored note.
///
/// The title doubles as the lookup key for deletion. Nothing enforces
/// uniqueness, so several notes may share a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Note title, never empty.
    pub title: String,
    /// Free text body.
    #[serde(default)]
    pub content: String,
    /// Reserved for itemised notes; always empty today.
    #[serde(default)]
    pub note_list: Vec<NoteItem>,
    /// Summary slot. Summaries are returned to callers but never written here.
    #[serde(default)]
    pub summary: String,
}

impl Note {
    /// Title of the note.
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl From<NewNote> for Note {
    fn from(new: NewNote) -> Self {
        Self {
            title: new.title,
            content: new.content,
            note_list: Vec::new(),
            summary: String::new(),
        }
    }
}

/// A numbered item inside a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteItem {
    pub note_number: i64,
    pub content: String,
}

// ============================================================================
// NewNote
// ============================================================================

/// A validated note creation request.
///
/// Only obtainable through [`crate::validate_new_note`], so holding one means
/// the title has already been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub(crate) title: String,
    pub(crate) content: String,
}

impl NewNote {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Build the document that gets persisted.
    #[must_use]
    pub fn into_note(self) -> Note {
        Note::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_note_initializes_reserved_fields() {
        let note = NewNote {
            title: "Groceries".to_string(),
            content: "milk, eggs".to_string(),
        }
        .into_note();

        assert_eq!(note.title(), "Groceries");
        assert_eq!(note.content, "milk, eggs");
        assert!(note.note_list.is_empty());
        assert!(note.summary.is_empty());
    }

    #[test]
    fn note_serializes_every_field() {
        let note = Note {
            title: "Groceries".to_string(),
            content: "milk, eggs".to_string(),
            note_list: Vec::new(),
            summary: String::new(),
        };
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Groceries",
                "content": "milk, eggs",
                "note_list": [],
                "summary": ""
            })
        );
    }

    #[test]
    fn note_deserializes_sparse_documents() {
        // Older documents were written without content or summary.
        let note: Note = serde_json::from_str(r#"{"title": "Old", "note_list": []}"#).unwrap();
        assert_eq!(note.title, "Old");
        assert_eq!(note.content, "");
        assert_eq!(note.summary, "");
    }

    #[test]
    fn note_item_shape() {
        let item: NoteItem =
            serde_json::from_str(r#"{"note_number": 1, "content": "first"}"#).unwrap();
        assert_eq!(item.note_number, 1);
        assert_eq!(item.content, "first");
    }
}
