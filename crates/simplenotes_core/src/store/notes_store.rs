//! Notes state store.
//!
//! # Responsibility
//! - Own the note collection, search query, selection and draft state.
//! - Mirror the collection to the durable store on every mutation.
//! - Drive debounced autosave while the user is typing.
//!
//! # Invariants
//! - Selecting a note always resets the draft and the dirty snapshot.
//! - Storage order is insertion order; display order is always derived.
//! - Persist failures are logged and swallowed; in-memory state stays the
//!   source of truth for the rest of the session.

use crate::autosave::{DebounceTimer, DEFAULT_AUTOSAVE_DELAY_MS};
use crate::clock::Clock;
use crate::model::note::{Draft, DraftPatch, Note, NoteId};
use crate::storage::{KeyValueStore, NOTES_KEY, SELECTED_KEY};
use log::warn;
use uuid::Uuid;

/// Reactive-state equivalent for the notes UI, constructed once at
/// application start with an injected storage backend and clock.
pub struct NotesStore<S: KeyValueStore, C: Clock> {
    storage: S,
    clock: C,
    notes: Vec<Note>,
    query: String,
    selected_id: Option<NoteId>,
    draft: Draft,
    original: Draft,
    autosave: DebounceTimer,
}

impl<S: KeyValueStore, C: Clock> NotesStore<S, C> {
    /// Creates an empty store with the default autosave delay.
    pub fn new(storage: S, clock: C) -> Self {
        Self::with_autosave_delay(storage, clock, DEFAULT_AUTOSAVE_DELAY_MS)
    }

    /// Creates an empty store with a caller-chosen autosave delay.
    pub fn with_autosave_delay(storage: S, clock: C, delay_ms: i64) -> Self {
        Self {
            storage,
            clock,
            notes: Vec::new(),
            query: String::new(),
            selected_id: None,
            draft: Draft::default(),
            original: Draft::default(),
            autosave: DebounceTimer::new(delay_ms),
        }
    }

    /// Notes in storage order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_id(&self) -> Option<NoteId> {
        self.selected_id
    }

    /// The currently selected note, if it still exists in the collection.
    pub fn selected_note(&self) -> Option<&Note> {
        let id = self.selected_id?;
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Whether the draft differs from the last-loaded/saved snapshot.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    /// Consumes the store and returns the storage backend.
    ///
    /// Lets embedders hand the backend to a successor store across an
    /// application restart.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Replaces the search text. No side effects; the filtered view is
    /// derived on read.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Notes matching the current query, most recently touched first.
    ///
    /// An empty (trimmed) query returns the whole collection. Matching is
    /// case-insensitive substring search over title and content. Ordering
    /// ties are broken arbitrarily.
    pub fn filtered_view(&self) -> Vec<&Note> {
        let folded = self.query.trim().to_lowercase();
        let mut view: Vec<&Note> = if folded.is_empty() {
            self.notes.iter().collect()
        } else {
            self.notes.iter().filter(|n| n.matches(&folded)).collect()
        };
        view.sort_unstable_by_key(|n| std::cmp::Reverse(n.last_touched_ms()));
        view
    }

    /// Selects `id` (or clears selection) and resets the draft.
    ///
    /// The selection id is mirrored to the secondary durable slot, with an
    /// empty string standing in for "none". The draft and its dirty-check
    /// snapshot are reset to the target note's fields, or to empty strings
    /// when `id` is `None` or unknown.
    pub fn select_note(&mut self, id: Option<NoteId>) {
        self.selected_id = id;
        let stored = id.map(|v| v.to_string()).unwrap_or_default();
        if let Err(err) = self.storage.set(SELECTED_KEY, &stored) {
            warn!("event=persist_failed module=store slot={SELECTED_KEY} err={err}");
        }
        self.draft = id
            .and_then(|id| self.notes.iter().find(|n| n.id == id))
            .map(Draft::of_note)
            .unwrap_or_default();
        self.original = self.draft.clone();
    }

    /// Merges a partial edit into the draft and (re)arms the autosave
    /// timer. Each call restarts the debounce window.
    pub fn update_draft(&mut self, patch: DraftPatch) {
        self.draft.apply(patch);
        self.autosave.schedule(self.clock.now_ms());
    }

    /// Fires a due autosave timer.
    ///
    /// Called by the host event loop. Saves only when a note is still
    /// selected and the draft is still dirty; returns whether a save
    /// happened.
    pub fn poll_autosave(&mut self) -> bool {
        if !self.autosave.fire_if_due(self.clock.now_ms()) {
            return false;
        }
        if self.selected_id.is_some() && self.is_dirty() {
            return self.save_note();
        }
        false
    }

    /// Creates an "Untitled" note at the front of the collection, persists,
    /// selects it and returns its id.
    pub fn create_note(&mut self) -> NoteId {
        let note = Note::new("Untitled", "", self.clock.now_ms());
        let id = note.id;
        self.notes.insert(0, note);
        self.persist();
        self.select_note(Some(id));
        id
    }

    /// Writes the draft into the selected note.
    ///
    /// Returns `false` without touching anything when no note is selected,
    /// the selected id is gone from the collection, or the draft is clean.
    /// On success the note's `updated_at` is stamped, the collection is
    /// persisted and the dirty-check snapshot refreshed.
    pub fn save_note(&mut self) -> bool {
        let Some(id) = self.selected_id else {
            return false;
        };
        let Some(idx) = self.notes.iter().position(|n| n.id == id) else {
            return false;
        };
        if !self.is_dirty() {
            return false;
        }
        let now = self.clock.now_ms();
        let note = &mut self.notes[idx];
        note.title = self.draft.title.clone();
        note.content = self.draft.content.clone();
        note.updated_at = Some(now);
        self.original = self.draft.clone();
        self.persist();
        true
    }

    /// Removes the note with `id` if present and persists.
    ///
    /// When the removed note was selected, selection moves to the first
    /// note in storage order (or none), through the same path as
    /// [`select_note`](Self::select_note) so the draft is reset.
    pub fn delete_note(&mut self, id: NoteId) {
        if let Some(idx) = self.notes.iter().position(|n| n.id == id) {
            self.notes.remove(idx);
            self.persist();
        }
        if self.selected_id == Some(id) {
            let next = self.notes.first().map(|n| n.id);
            self.select_note(next);
        }
    }

    /// Loads the collection and selection from durable storage.
    ///
    /// Any read or parse failure on the primary slot degrades to an empty
    /// collection. The persisted selection id is restored when it still
    /// names an existing note, else selection falls back to the first note
    /// in storage order, else none.
    pub fn load_from_storage(&mut self) {
        self.notes = match self.storage.get(NOTES_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<Vec<Note>>(&raw).unwrap_or_else(|err| {
                warn!("event=load_failed module=store slot={NOTES_KEY} err={err}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("event=load_failed module=store slot={NOTES_KEY} err={err}");
                Vec::new()
            }
        };

        let saved = match self.storage.get(SELECTED_KEY) {
            Ok(value) => value.unwrap_or_default(),
            Err(err) => {
                warn!("event=load_failed module=store slot={SELECTED_KEY} err={err}");
                String::new()
            }
        };
        let restored = Uuid::parse_str(saved.trim())
            .ok()
            .filter(|id| self.notes.iter().any(|n| n.id == *id));
        let target = restored.or_else(|| self.notes.first().map(|n| n.id));
        self.select_note(target);
    }

    /// Mirrors the full collection to the primary durable slot.
    ///
    /// Failures are logged and swallowed; the next mutating operation will
    /// naturally retry by persisting again.
    pub fn persist(&mut self) {
        match serde_json::to_string(&self.notes) {
            Ok(raw) => {
                if let Err(err) = self.storage.set(NOTES_KEY, &raw) {
                    warn!("event=persist_failed module=store slot={NOTES_KEY} err={err}");
                }
            }
            Err(err) => {
                warn!("event=persist_failed module=store slot={NOTES_KEY} err={err}");
            }
        }
    }
}
