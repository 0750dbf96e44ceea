//! In-memory key-value store.
//!
//! # Responsibility
//! - Back tests and embedders that do not need durability.
//! - Allow injecting write failures to exercise degraded persistence paths.

use crate::storage::{KeyValueStore, StorageError, StorageResult};
use std::collections::HashMap;

/// HashMap-backed store with no durability.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent write fail with an I/O error.
    ///
    /// Used to exercise the swallowed-persist-failure contract.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    fn check_writable(&self) -> StorageResult<()> {
        if self.fail_writes {
            return Err(StorageError::Io(std::io::Error::other(
                "injected write failure",
            )));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.check_writable()?;
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.check_writable()?;
        self.slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStore;
    use crate::storage::KeyValueStore;

    #[test]
    fn missing_key_reads_as_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn injected_failure_rejects_writes_but_not_reads() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();
        store.set_fail_writes(true);
        assert!(store.set("k", "v2").is_err());
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
