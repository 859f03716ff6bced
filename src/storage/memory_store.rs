use std::collections::HashMap;
use std::sync::Mutex;

use super::KeyValueStore;
use crate::error::{Error, Result};

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> Result<R> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| Error::Storage("Memory store lock poisoned".to_string()))?;
        Ok(f(&mut entries))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.with_entries(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.with_entries(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.with_entries(|entries| {
            entries.remove(key);
        })
    }
}
