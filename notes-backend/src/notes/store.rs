//! NoteStore — in-memory note collection
//!
//! Single owner of the note sequence. Every operation takes the mutex once
//! around a linear scan or mutation, since actix runs handlers on multiple
//! worker threads against the same shared store.

use std::sync::Mutex;

use crate::models::{CreateNoteRequest, Note};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("content missing")]
    ContentMissing,
}

pub struct NoteStore {
    notes: Mutex<Vec<Note>>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            notes: Mutex::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with the three startup sample notes.
    pub fn with_seed_notes() -> Self {
        let store = Self::new();
        {
            let mut notes = store.notes.lock().unwrap();
            notes.push(Note {
                id: "1".to_string(),
                content: "HTML is easy".to_string(),
                important: true,
            });
            notes.push(Note {
                id: "2".to_string(),
                content: "Browser can execute only JavaScript".to_string(),
                important: false,
            });
            notes.push(Note {
                id: "3".to_string(),
                content: "GET and POST are the most important methods of HTTP protocol".to_string(),
                important: true,
            });
        }
        store
    }

    /// All notes in insertion order.
    pub fn list(&self) -> Vec<Note> {
        self.notes.lock().unwrap().clone()
    }

    /// Linear-scan lookup by id.
    pub fn get(&self, id: &str) -> Option<Note> {
        self.notes.lock().unwrap().iter().find(|n| n.id == id).cloned()
    }

    /// Validate and append a new note. `important` defaults to false.
    /// The collection is left untouched when validation fails.
    pub fn create(&self, req: CreateNoteRequest) -> Result<Note, StoreError> {
        let content = match req.content {
            Some(c) if !c.is_empty() => c,
            _ => return Err(StoreError::ContentMissing),
        };

        let mut notes = self.notes.lock().unwrap();
        let note = Note {
            id: next_id(&notes),
            content,
            important: req.important.unwrap_or(false),
        };
        notes.push(note.clone());
        Ok(note)
    }

    /// Remove any note matching id. Deleting an absent id is a no-op,
    /// not an error.
    pub fn delete(&self, id: &str) {
        self.notes.lock().unwrap().retain(|n| n.id != id);
    }
}

/// Next id is max(existing numeric ids) + 1 as a decimal string, "1" for an
/// empty collection. This is max-then-increment, not a persistent counter:
/// deleting the highest-id note makes its id available again.
fn next_id(notes: &[Note]) -> String {
    let max_id = notes
        .iter()
        .map(|n| n.id.parse::<u64>().unwrap_or(0))
        .max()
        .unwrap_or(0);
    (max_id + 1).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_req(content: Option<&str>, important: Option<bool>) -> CreateNoteRequest {
        CreateNoteRequest {
            content: content.map(|c| c.to_string()),
            important,
        }
    }

    #[test]
    fn test_seed_ids_are_distinct() {
        let store = NoteStore::with_seed_notes();
        let notes = store.list();
        assert_eq!(notes.len(), 3);
        for (i, a) in notes.iter().enumerate() {
            for b in &notes[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_get_returns_matching_note() {
        let store = NoteStore::with_seed_notes();
        let note = store.get("2").expect("note 2 should exist");
        assert_eq!(note.content, "Browser can execute only JavaScript");
        assert!(!note.important);
    }

    #[test]
    fn test_get_unknown_id_returns_none() {
        let store = NoteStore::with_seed_notes();
        assert!(store.get("99").is_none());
    }

    #[test]
    fn test_create_missing_content_rejected() {
        let store = NoteStore::with_seed_notes();
        let err = store.create(create_req(None, None)).unwrap_err();
        assert!(matches!(err, StoreError::ContentMissing));
        assert_eq!(err.to_string(), "content missing");
        // Collection must be untouched
        assert_eq!(store.list().len(), 3);
    }

    #[test]
    fn test_create_empty_content_rejected() {
        let store = NoteStore::with_seed_notes();
        assert!(store.create(create_req(Some(""), Some(true))).is_err());
        assert_eq!(store.list().len(), 3);
    }

    #[test]
    fn test_create_assigns_max_plus_one() {
        let store = NoteStore::with_seed_notes();
        let note = store.create(create_req(Some("x"), None)).unwrap();
        assert_eq!(note.id, "4");
        assert!(!note.important);
        assert_eq!(store.list().len(), 4);
    }

    #[test]
    fn test_create_on_empty_store_starts_at_one() {
        let store = NoteStore::new();
        let note = store.create(create_req(Some("first"), Some(true))).unwrap();
        assert_eq!(note.id, "1");
        assert!(note.important);
    }

    #[test]
    fn test_id_reuse_after_deleting_highest() {
        let store = NoteStore::with_seed_notes();
        let note = store.create(create_req(Some("x"), None)).unwrap();
        assert_eq!(note.id, "4");
        store.delete("4");
        // Max is back to 3, so the next create reuses "4"
        let note = store.create(create_req(Some("y"), None)).unwrap();
        assert_eq!(note.id, "4");
    }

    #[test]
    fn test_delete_preserves_relative_order() {
        let store = NoteStore::with_seed_notes();
        store.delete("2");
        let ids: Vec<String> = store.list().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["1".to_string(), "3".to_string()]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let store = NoteStore::with_seed_notes();
        store.delete("99");
        assert_eq!(store.list().len(), 3);
    }
}
