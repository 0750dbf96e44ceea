//! Durable key-value storage boundary.
//!
//! # Responsibility
//! - Define the string-keyed store contract the notes store persists through.
//! - Isolate backend details (files, in-memory maps) from store logic.
//!
//! # Invariants
//! - A missing key reads as `Ok(None)`, never as an error.
//! - Backends return semantic errors (`InvalidKey`) in addition to transport
//!   errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Primary slot: the full note collection as a JSON array.
pub const NOTES_KEY: &str = "simple-notes.v1";
/// Secondary slot: the last-selected note id; empty string means none.
pub const SELECTED_KEY: &str = "simple-notes.selected";

pub type StorageResult<T> = Result<T, StorageError>;

/// Generic storage error for key-value read/write operations.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    InvalidKey(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::InvalidKey(key) => write!(f, "invalid storage key `{key}`"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidKey(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Storage interface for string-keyed durable slots.
///
/// The local-storage equivalent of the original browser client: two fixed
/// keys, whole-value reads and writes, no partial updates.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}
