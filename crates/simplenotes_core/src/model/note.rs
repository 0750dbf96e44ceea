//! Note record and draft types.
//!
//! # Responsibility
//! - Define the note shape stored in the durable collection slot.
//! - Provide the draft pair used for in-progress edits and dirty checks.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `created_at` is set once at creation and never mutated.
//! - `updated_at` is written only by the save path.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every note in a collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Canonical note record.
///
/// Timestamp fields keep their original camelCase wire names so collections
/// written by the earlier web client still deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Unix epoch milliseconds, set once at creation.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
    /// Unix epoch milliseconds of the last save. Absent on notes that were
    /// written by clients that never saved after creation.
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Note {
    /// Creates a note with a generated stable ID.
    ///
    /// # Invariants
    /// - `created_at` and `updated_at` both start at `now_ms`.
    pub fn new(title: impl Into<String>, content: impl Into<String>, now_ms: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            created_at: now_ms,
            updated_at: Some(now_ms),
        }
    }

    /// Returns the recency key used for display ordering.
    ///
    /// Falls back to `created_at` when the note was never saved.
    pub fn last_touched_ms(&self) -> i64 {
        self.updated_at.unwrap_or(self.created_at)
    }

    /// Returns whether title or content contains `folded_query`.
    ///
    /// The caller is expected to pass an already trimmed, lowercased query.
    pub fn matches(&self, folded_query: &str) -> bool {
        self.title.to_lowercase().contains(folded_query)
            || self.content.to_lowercase().contains(folded_query)
    }
}

/// Transient in-progress edits for the selected note.
///
/// Never persisted; compared against the last-loaded snapshot to decide
/// whether a save is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    /// Snapshots a note's editable fields.
    pub fn of_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }

    /// Merges a partial edit into this draft.
    pub fn apply(&mut self, patch: DraftPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }
}

/// Partial draft update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct DraftPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl DraftPatch {
    /// Patch that replaces only the title.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    /// Patch that replaces only the content.
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(content.into()),
        }
    }
}
