//! In-memory note store.
//!
//! `NoteStore` owns every `Note`. Callers only ever see clones; changes go
//! through `update`, which mutates the stored note while holding the lock.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use notes_core::{Note, NoteContent, NoteId};
use tokio::sync::Mutex;

use crate::error::{StoreError, StoreResult};

/// Mutex-guarded map from id to note.
///
/// Construct once at startup and share it (e.g. behind an `Arc`).
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Mutex<HashMap<NoteId, Note>>,
}

impl NoteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new note.
    ///
    /// Fails with `DuplicateNote` if the id is already taken; the existing
    /// note is left untouched.
    pub async fn put(&self, note: Note) -> StoreResult<()> {
        let mut notes = self.notes.lock().await;
        match notes.entry(note.id) {
            Entry::Occupied(_) => Err(StoreError::DuplicateNote(note.id)),
            Entry::Vacant(slot) => {
                tracing::debug!(note_id = %note.id, "Stored note");
                slot.insert(note);
                Ok(())
            }
        }
    }

    /// Fetch a copy of a note.
    pub async fn get(&self, id: &NoteId) -> StoreResult<Note> {
        let notes = self.notes.lock().await;
        notes.get(id).cloned().ok_or_else(|| StoreError::not_found(id))
    }

    /// Overwrite the name and text of a note, returning the updated copy.
    pub async fn update(&self, id: &NoteId, content: NoteContent) -> StoreResult<Note> {
        let mut notes = self.notes.lock().await;
        let note = notes.get_mut(id).ok_or_else(|| StoreError::not_found(id))?;
        note.apply(content);
        tracing::debug!(note_id = %id, "Updated note");
        Ok(note.clone())
    }

    /// Remove a note.
    pub async fn delete(&self, id: &NoteId) -> StoreResult<()> {
        let mut notes = self.notes.lock().await;
        match notes.remove(id) {
            Some(_) => {
                tracing::debug!(note_id = %id, "Deleted note");
                Ok(())
            }
            None => Err(StoreError::not_found(id)),
        }
    }

    /// Number of stored notes.
    pub async fn len(&self) -> usize {
        self.notes.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.notes.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn sample(name: &str, text: &str) -> Note {
        Note::create(NoteContent::new(name, text))
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = NoteStore::new();
        let note = sample("a", "b");

        store.put(note.clone()).await.unwrap();

        assert_eq!(store.get(&note.id).await.unwrap(), note);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_put_rejects_duplicate_id() {
        let store = NoteStore::new();
        let note = sample("a", "b");
        store.put(note.clone()).await.unwrap();

        let mut clash = sample("x", "y");
        clash.id = note.id;
        let err = store.put(clash).await.unwrap_err();

        assert!(matches!(err, StoreError::DuplicateNote(id) if id == note.id));
        assert_eq!(store.get(&note.id).await.unwrap().name, "a");
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let store = NoteStore::new();
        let err = store.get(&NoteId::generate()).await.unwrap_err();
        assert!(matches!(err, StoreError::NoteNotFound(_)));
    }

    #[tokio::test]
    async fn test_update_changes_content_only() {
        let store = NoteStore::new();
        let note = sample("a", "b");
        store.put(note.clone()).await.unwrap();

        let updated = store
            .update(&note.id, NoteContent::new("c", "d"))
            .await
            .unwrap();

        assert_eq!(updated.id, note.id);
        assert_eq!(updated.created_at, note.created_at);
        assert_eq!(updated.name, "c");
        assert_eq!(updated.text, "d");
        assert_eq!(store.get(&note.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_is_idempotent() {
        let store = NoteStore::new();
        let note = sample("a", "b");
        store.put(note.clone()).await.unwrap();

        let first = store
            .update(&note.id, NoteContent::new("c", "d"))
            .await
            .unwrap();
        let second = store
            .update(&note.id, NoteContent::new("c", "d"))
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let store = NoteStore::new();
        let err = store
            .update(&NoteId::generate(), NoteContent::new("c", "d"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NoteNotFound(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let store = NoteStore::new();
        let note = sample("a", "b");
        store.put(note.clone()).await.unwrap();

        store.delete(&note.id).await.unwrap();
        let err = store.delete(&note.id).await.unwrap_err();

        assert!(matches!(err, StoreError::NoteNotFound(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_puts_all_land() {
        let store = Arc::new(NoteStore::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    let note = sample(&format!("note-{i}"), "body");
                    store.put(note).await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.len().await, 64);
    }
}
