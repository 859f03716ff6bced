//! Key-value persistence for the job board.
//!
//! Every collection lives as one JSON document under a fixed key. Reads fail
//! open: a missing or unparsable document yields an empty collection and the
//! underlying fault is logged. Writes replace the document wholesale and are
//! not atomic across keys.

pub mod file_store;
pub mod memory_store;

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

pub const JOBS_KEY: &str = "job_postings";
pub const APPLICATIONS_KEY: &str = "job_applications";
pub const USERS_KEY: &str = "job_portal_users";
pub const CURRENT_USER_KEY: &str = "job_portal_current_user";

#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn KeyValueStore>,
}

impl Store {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Reads a collection, reporting missing keys as empty and any fault as an error.
    pub fn try_read<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        match self.backend.get(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.try_read(key).unwrap_or_else(|err| {
            tracing::warn!(key, error = %err, "Unreadable collection, substituting an empty one");
            Vec::new()
        })
    }

    pub fn write<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.backend.set(key, &raw)?;
        tracing::debug!(key, count = items.len(), "Collection written");
        Ok(())
    }

    pub fn read_value<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let parsed = self
            .backend
            .get(key)
            .and_then(|raw| match raw {
                Some(raw) => serde_json::from_str(&raw).map(Some).map_err(Error::from),
                None => Ok(None),
            });
        match parsed {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "Unreadable document, treating as absent");
                None
            }
        }
    }

    pub fn write_value<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, &raw)
    }

    pub fn clear(&self, key: &str) -> Result<()> {
        self.backend.remove(key)
    }
}

pub fn open_store(config: &Config) -> Result<Store> {
    let backend = FileStore::open(&config.data_dir)?;
    tracing::debug!(path = %config.data_dir.display(), "Opened file store");
    Ok(Store::new(backend))
}
