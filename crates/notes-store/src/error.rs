//! Error types for the storage layer.

use notes_core::NoteId;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No note is stored under the requested id.
    ///
    /// Holds the id as the caller supplied it, which may not even be a
    /// well-formed `NoteId`.
    #[error("note not found: {0}")]
    NoteNotFound(String),

    /// A note with this id already exists.
    #[error("duplicate note: {0}")]
    DuplicateNote(NoteId),
}

impl StoreError {
    /// Not-found error for a well-formed id.
    pub fn not_found(id: &NoteId) -> Self {
        Self::NoteNotFound(id.to_string())
    }
}
