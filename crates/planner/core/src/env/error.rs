//! Oracle lookup errors.

use crate::error::{ErrorSeverity, PlannerError};

use super::skills::SkillCategory;

/// Errors raised when an edit names reference data that does not exist.
///
/// Calculations never return these: a missing unit or skill there degrades
/// to zero stats or zero cost. They surface only where an edit cannot be
/// applied at all.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// Unit identifier not present in the dataset.
    #[error("unit '{0}' not found")]
    UnitNotFound(String),

    /// Skill not present in its category catalog.
    #[error("{category} skill '{name}' not found")]
    SkillNotFound {
        category: SkillCategory,
        name: String,
    },

    /// No levelled variant of a passive matches the requested level.
    #[error("{slot} skill '{base}' has no level {level}")]
    LevelNotFound {
        slot: SkillCategory,
        base: String,
        level: u8,
    },
}

impl PlannerError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            UnitNotFound(_) | SkillNotFound { .. } | LevelNotFound { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            UnitNotFound(_) => "ORACLE_UNIT_NOT_FOUND",
            SkillNotFound { .. } => "ORACLE_SKILL_NOT_FOUND",
            LevelNotFound { .. } => "ORACLE_LEVEL_NOT_FOUND",
        }
    }
}
