//! Core data types for the notes service.
//!
//! A [`Note`] is the only resource the service manages. Its identity and
//! creation time are fixed when it is created; only the [`NoteContent`]
//! (name and text) can change afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a note.
///
/// Wraps a random UUID v4. Serializes as the canonical hyphenated string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub Uuid);

impl NoteId {
    /// Generates a fresh identifier for a newly created note.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ============================================================================
// Note
// ============================================================================

/// The mutable part of a note, as accepted by create and update requests.
///
/// Both fields are required. Any other field in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteContent {
    pub name: String,
    pub text: String,
}

impl NoteContent {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// A stored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Assigned at creation, never changes.
    pub id: NoteId,
    pub name: String,
    pub text: String,
    /// Assigned at creation, never changes. Serialized as RFC 3339.
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Creates a new note with a fresh id, stamped with the current time.
    #[must_use]
    pub fn create(content: NoteContent) -> Self {
        Self {
            id: NoteId::generate(),
            name: content.name,
            text: content.text,
            created_at: Utc::now(),
        }
    }

    /// Replaces name and text, leaving id and creation time untouched.
    pub fn apply(&mut self, content: NoteContent) {
        self.name = content.name;
        self.text = content.text;
    }
}
