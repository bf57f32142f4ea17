//! File-based KeyValueStore implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::{KeyValueStore, RepositoryError, Result};

/// File-based implementation of KeyValueStore.
///
/// # File Format
///
/// Each key is stored as `{key}.json` under the base directory. Keys are
/// sanitized so that only `[A-Za-z0-9._-]` reach the file system. Writes go
/// to a temp file first and are renamed into place.
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Create a new file-based store, creating the directory if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    /// Platform data directory for saved builds.
    ///
    /// - Linux: `~/.local/share/unit-planner` (or `$XDG_DATA_HOME/unit-planner`)
    /// - macOS: `~/Library/Application Support/unit-planner`
    /// - Windows: `%APPDATA%\unit-planner`
    /// - Fallback: `./save_data`
    pub fn default_dir() -> PathBuf {
        directories::ProjectDirs::from("", "", "unit-planner")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./save_data"))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn value_path(&self, key: &str) -> PathBuf {
        let file: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_dir.join(format!("{file}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path).map_err(RepositoryError::Io)?;
        tracing::debug!("Loaded {} from {}", key, path.display());
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.value_path(key);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved {} to {}", key, path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.value_path(key);
        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Removed {}", key);
        }
        Ok(())
    }

    fn contains(&self, key: &str) -> bool {
        self.value_path(key).exists()
    }
}
