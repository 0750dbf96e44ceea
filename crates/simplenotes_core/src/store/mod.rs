//! Note state store.
//!
//! # Responsibility
//! - Orchestrate note CRUD, selection and draft state over a storage
//!   backend.
//! - Keep UI layers decoupled from persistence details.

pub mod notes_store;
