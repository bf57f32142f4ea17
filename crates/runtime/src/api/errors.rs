//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from content loading, repositories, and build edits so
//! clients can bubble them up with consistent context.
use std::path::PathBuf;

use thiserror::Error;

use planner_core::BuildError;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to load reference data from {path}")]
    Content {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("no saved build '{name}' for {unit}")]
    BuildNotFound { unit: String, name: String },

    #[error("build name must not be empty")]
    EmptyBuildName,
}
