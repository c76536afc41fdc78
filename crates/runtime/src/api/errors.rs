//! Unified error types surfaced by the runtime API.
use maze_core::{ConfigError, ErrorSeverity, MazeError};
use thiserror::Error;

use super::CommandError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("invalid maze configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("round {round} is over; start a new round to keep playing")]
    RoundOver { round: u32 },
}

impl MazeError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Config(e) => e.severity(),
            RuntimeError::Command(e) => e.severity(),
            RuntimeError::RoundOver { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Config(e) => e.error_code(),
            RuntimeError::Command(e) => e.error_code(),
            RuntimeError::RoundOver { .. } => "RUNTIME_ROUND_OVER",
        }
    }
}
