//! Common error infrastructure for maze-core.
//!
//! Domain-specific errors (e.g. `MoveError`, `UseError`) are defined next to
//! the actions they validate. This module only holds the shared
//! classification trait.
//!
//! None of these conditions is fatal to a round: a blocked move or a
//! mismatched item is a reportable outcome, and generation failures degrade to
//! an item-free maze inside the generator.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The command was legal but the board refused it (wall, blocker, wrong item).
    ///
    /// The caller may try a different command.
    Recoverable,

    /// Invalid input that should not be retried unchanged.
    ///
    /// Examples: zero-sized grid, blocker on a walled passage
    Validation,

    /// Unexpected state inconsistency. Indicates a bug.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all maze-core errors.
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait MazeError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for this error variant, used in logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
