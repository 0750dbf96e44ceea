//! Core domain logic for Simple Notes.
//! This crate is the single source of truth for note state and persistence.

pub mod autosave;
pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;

pub use autosave::{DebounceTimer, DEFAULT_AUTOSAVE_DELAY_MS};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::RuntimeConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Draft, DraftPatch, Note, NoteId};
pub use storage::{
    FileStore, KeyValueStore, MemoryStore, StorageError, StorageResult, NOTES_KEY, SELECTED_KEY,
};
pub use store::notes_store::NotesStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
