//! Common error infrastructure for planner-core.
//!
//! Domain-specific errors (e.g. [`crate::build::BuildError`],
//! [`crate::env::OracleError`]) live next to the code that raises them and
//! implement [`PlannerError`] for uniform classification.
//!
//! Most of the engine never fails: missing reference data degrades to zero
//! deltas and zero costs. Errors are reserved for edits that cannot be applied
//! at all (unknown unit, unknown passive level).

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The edit was rejected but the session is intact; pick another input.
    Recoverable,

    /// Invalid input that should not be retried unchanged.
    Validation,

    /// Reference data is inconsistent with itself.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates broken reference data.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all planner-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are stable identifiers usable in logs and tests
pub trait PlannerError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
