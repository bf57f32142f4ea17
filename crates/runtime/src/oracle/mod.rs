//! Shared handle to the immutable reference data.
//!
//! [`OracleManager`] owns the loaded dataset and calculation config and hands
//! out [`planner_core::PlannerEnv`] views on demand. The data never changes
//! after loading; user data lives in repositories.

use std::path::Path;
use std::sync::Arc;

use planner_content::ContentFactory;
use planner_core::{CalcConfig, PlannerEnv, ReferenceData};

use crate::api::{Result, RuntimeError};

/// Manages the reference dataset and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    data: Arc<ReferenceData>,
    config: Arc<CalcConfig>,
}

impl OracleManager {
    pub fn new(data: ReferenceData, config: CalcConfig) -> Self {
        Self {
            data: Arc::new(data),
            config: Arc::new(config),
        }
    }

    /// Loads the dataset and `config.toml` from a data directory.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let factory = ContentFactory::new(data_dir);
        let content_error = |err: anyhow::Error| RuntimeError::Content {
            path: data_dir.to_path_buf(),
            source: err.into(),
        };
        let config = factory.load_config().map_err(content_error)?;
        let data = factory.load_reference_data().map_err(content_error)?;
        Ok(Self::new(data, config))
    }

    /// Borrowed oracle bundle for the engine.
    pub fn env(&self) -> PlannerEnv<'_> {
        self.data.env(&self.config)
    }

    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }
}
