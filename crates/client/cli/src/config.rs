//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use planner_runtime::FileStore;

/// Where the CLI reads reference data and keeps saved builds.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub save_dir: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            save_dir: FileStore::default_dir(),
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PLANNER_DATA_DIR` - Reference data directory (default: `./data`)
    /// - `PLANNER_SAVE_DIR` - Saved builds directory (default: platform-specific)
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = read_path("PLANNER_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Some(dir) = read_path("PLANNER_SAVE_DIR") {
            config.save_dir = dir;
        }
        config
    }

    /// Command-line flags win over the environment.
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, save_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(dir) = save_dir {
            self.save_dir = dir;
        }
        self
    }
}

fn read_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
