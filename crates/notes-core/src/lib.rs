//! notes-core: Core types for the notes service
//!
//! This crate provides:
//! - `NoteId`, the random identifier assigned to every note
//! - `Note`, the stored record
//! - `NoteContent`, the name/text payload of create and update requests

pub mod types;

pub use types::{Note, NoteContent, NoteId};
