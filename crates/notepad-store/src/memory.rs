//! In-memory note store.

use async_trait::async_trait;
use notepad_core::Note;
use tokio::sync::RwLock;

use crate::error::StoreResult;
use crate::store::NoteStore;

/// Note store holding documents in process memory.
///
/// Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    notes: RwLock<Vec<Note>>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `notes`, in order.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: RwLock::new(notes),
        }
    }

    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.notes.read().await.is_empty()
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn insert(&self, note: &Note) -> StoreResult<()> {
        self.notes.write().await.push(note.clone());
        Ok(())
    }

    async fn find_all(&self) -> StoreResult<Vec<Note>> {
        Ok(self.notes.read().await.clone())
    }

    async fn delete_one(&self, title: &str) -> StoreResult<bool> {
        let mut notes = self.notes.write().await;
        match notes.iter().position(|n| n.title == title) {
            Some(index) => {
                notes.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str, content: &str) -> Note {
        Note {
            title: title.to_string(),
            content: content.to_string(),
            note_list: Vec::new(),
            summary: String::new(),
        }
    }

    #[tokio::test]
    async fn insert_then_find_all_keeps_order() {
        let store = MemoryNoteStore::new();
        store.insert(&note("a", "1")).await.unwrap();
        store.insert(&note("b", "2")).await.unwrap();

        let notes = store.find_all().await.unwrap();
        let titles: Vec<_> = notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["a", "b"]);
    }

    #[tokio::test]
    async fn duplicate_titles_are_kept() {
        let store = MemoryNoteStore::new();
        store.insert(&note("dup", "first")).await.unwrap();
        store.insert(&note("dup", "second")).await.unwrap();
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn delete_one_removes_first_match_only() {
        let store = MemoryNoteStore::with_notes(vec![
            note("dup", "first"),
            note("other", "x"),
            note("dup", "second"),
        ]);

        assert!(store.delete_one("dup").await.unwrap());

        let notes = store.find_all().await.unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title, "other");
        assert_eq!(notes[1].content, "second");
    }

    #[tokio::test]
    async fn delete_one_missing_title_is_noop() {
        let store = MemoryNoteStore::with_notes(vec![note("a", "1")]);

        assert!(!store.delete_one("missing").await.unwrap());
        assert_eq!(store.find_all().await.unwrap(), vec![note("a", "1")]);
    }

    #[tokio::test]
    async fn delete_one_matches_exact_title() {
        let store = MemoryNoteStore::with_notes(vec![note("Groceries", "")]);

        assert!(!store.delete_one("groceries").await.unwrap());
        assert!(!store.delete_one("Groceries ").await.unwrap());
        assert!(!store.is_empty().await);
    }

    #[tokio::test]
    async fn ping_always_succeeds() {
        assert!(MemoryNoteStore::new().ping().await.is_ok());
    }
}
