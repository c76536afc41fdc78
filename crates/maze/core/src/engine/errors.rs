//! Error types for the command pipeline.

use crate::action::{ActionTransition, DropAction, MoveAction, PickUpAction, UseAction};
use crate::error::{ErrorSeverity, MazeError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // A refusal during validation is the normal case; only name the phase
        // when something broke after the board was touched.
        match self.phase {
            TransitionPhase::PreValidate => write!(f, "{}", self.error),
            phase => write!(f, "{} failed: {}", phase.as_str(), self.error),
        }
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing a command through the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("{0}")]
    Move(TransitionPhaseError<<MoveAction as ActionTransition>::Error>),

    #[error("{0}")]
    PickUp(TransitionPhaseError<<PickUpAction as ActionTransition>::Error>),

    #[error("{0}")]
    Drop(TransitionPhaseError<<DropAction as ActionTransition>::Error>),

    #[error("{0}")]
    Use(TransitionPhaseError<<UseAction as ActionTransition>::Error>),
}

impl ExecuteError {
    pub fn phase(&self) -> TransitionPhase {
        match self {
            ExecuteError::Move(e) => e.phase,
            ExecuteError::PickUp(e) => e.phase,
            ExecuteError::Drop(e) => e.phase,
            ExecuteError::Use(e) => e.phase,
        }
    }

    fn inner(&self) -> &dyn MazeError {
        match self {
            ExecuteError::Move(e) => &e.error,
            ExecuteError::PickUp(e) => &e.error,
            ExecuteError::Drop(e) => &e.error,
            ExecuteError::Use(e) => &e.error,
        }
    }
}

impl MazeError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        if self.phase() == TransitionPhase::PreValidate {
            self.inner().severity()
        } else {
            ErrorSeverity::Internal
        }
    }

    fn error_code(&self) -> &'static str {
        self.inner().error_code()
    }
}
