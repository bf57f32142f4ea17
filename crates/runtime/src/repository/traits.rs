//! Storage contract for persisted planner data.

use super::error::Result;

/// String key/value store.
///
/// Mirrors browser-style local storage: a flat namespace of string keys
/// holding string values. Implementations must be usable across threads.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. Absent keys are `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert or replace a value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Check whether a key holds a value.
    fn contains(&self, key: &str) -> bool {
        matches!(self.get(key), Ok(Some(_)))
    }
}
