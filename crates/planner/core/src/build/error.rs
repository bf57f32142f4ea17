//! Build edit errors.

use crate::env::{OracleError, SkillCategory};
use crate::error::{ErrorSeverity, PlannerError};

/// Reasons an edit cannot be applied. The previous build stays valid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// A level was requested for a slot that holds no skill.
    #[error("{0} slot is empty")]
    EmptySlot(SkillCategory),

    /// A refine was requested without a refinable weapon equipped.
    #[error("weapon '{0}' cannot be refined")]
    NotRefinable(String),

    /// A persisted boon/bane or refine field does not parse.
    #[error("invalid {field} '{value}' in build record")]
    InvalidRecord { field: &'static str, value: String },
}

impl PlannerError for BuildError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            BuildError::Oracle(err) => err.severity(),
            BuildError::EmptySlot(_) | BuildError::NotRefinable(_) => ErrorSeverity::Recoverable,
            BuildError::InvalidRecord { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            BuildError::Oracle(err) => err.error_code(),
            BuildError::EmptySlot(_) => "BUILD_EMPTY_SLOT",
            BuildError::NotRefinable(_) => "BUILD_NOT_REFINABLE",
            BuildError::InvalidRecord { .. } => "BUILD_INVALID_RECORD",
        }
    }
}
