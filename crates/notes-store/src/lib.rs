//! notes-store: Storage layer for the notes service
//!
//! All notes live in a single map guarded by one mutex. Every operation
//! holds the lock for its whole duration, so each call is atomic with
//! respect to every other call. Nothing is persisted.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_core::{Note, NoteContent};
//! use notes_store::NoteStore;
//!
//! let store = NoteStore::new();
//! let note = Note::create(NoteContent::new("groceries", "milk"));
//! store.put(note.clone()).await?;
//! let fetched = store.get(&note.id).await?;
//! ```

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::NoteStore;

// Re-export notes-core for downstream crates
pub use notes_core;
