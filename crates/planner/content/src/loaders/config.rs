//! Calculation configuration loader.

use std::path::Path;

use planner_core::CalcConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for calculation config from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Keys left out keep their defaults.
    pub fn load(path: &Path) -> LoadResult<CalcConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CalcConfig> {
        let config: CalcConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
