// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HashMap-backed storage for tests and hosts without a disk.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{KeyValueStore, StorageError};

/// In-memory storage. Clones share the same slots.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots currently holding a value.
    pub fn len(&self) -> usize {
        self.slots.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self
            .slots
            .read()
            .map_err(|_| StorageError::Unavailable("lock poisoned".into()))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| StorageError::Unavailable("lock poisoned".into()))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| StorageError::Unavailable("lock poisoned".into()))?;
        slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("workouts").unwrap(), None);

        storage.set("workouts", "[]").unwrap();
        assert_eq!(storage.get("workouts").unwrap().as_deref(), Some("[]"));

        storage.remove("workouts").unwrap();
        storage.remove("workouts").unwrap();
        assert_eq!(storage.get("workouts").unwrap(), None);
    }

    #[test]
    fn test_clones_share_slots() {
        let storage = MemoryStorage::new();
        let view = storage.clone();

        storage.set("a", "1").unwrap();

        assert_eq!(view.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(view.len(), 1);
    }
}
