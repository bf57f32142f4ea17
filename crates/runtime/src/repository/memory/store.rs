//! In-memory KeyValueStore implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::repository::{KeyValueStore, RepositoryError, Result};

/// In-memory implementation of KeyValueStore.
#[derive(Default)]
pub struct InMemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with one key already set.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            values: RwLock::new(HashMap::from([(key.into(), value.into())])),
        }
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        values.remove(key);
        Ok(())
    }

    fn contains(&self, key: &str) -> bool {
        self.values
            .read()
            .map(|values| values.contains_key(key))
            .unwrap_or(false)
    }
}
