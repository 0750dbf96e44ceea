//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record and its transient draft companion.
//! - Keep the persisted JSON shape readable by collections written before
//!   this core existed.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Drafts are never persisted; only the save path mutates a note.

pub mod note;
