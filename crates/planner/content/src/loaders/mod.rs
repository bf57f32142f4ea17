//! Content loaders for reading the reference dataset from files.
//!
//! JSON objects are read in file order, which becomes catalog and dropdown
//! order downstream.

pub mod config;
pub mod factory;
pub mod skills;
pub mod units;
pub mod upgrades;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use skills::SkillLoader;
pub use units::UnitLoader;
pub use upgrades::UpgradeLoader;

use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Parses a JSON file into `T`.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> LoadResult<T> {
    let content = read_file(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON {}", path.display()))
}

/// Like [`read_json`], but a missing file yields `None`.
pub(crate) fn read_optional_json<T: DeserializeOwned>(path: &Path) -> LoadResult<Option<T>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "optional data file not present");
        return Ok(None);
    }
    read_json(path).map(Some)
}
