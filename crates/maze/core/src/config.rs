use crate::error::{ErrorSeverity, MazeError};

/// Maze generation parameters for a single round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
    /// Placement configurations tried before settling for an item-free maze.
    pub placement_attempts: u32,
}

impl MazeConfig {
    // ===== blocker scaling =====
    /// One gate per this many cells, before clamping.
    pub const CELLS_PER_BLOCKER: usize = 30;
    pub const MIN_BLOCKERS: usize = 2;
    pub const MAX_BLOCKERS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ROWS: usize = 8;
    pub const DEFAULT_COLS: usize = 8;
    pub const DEFAULT_PLACEMENT_ATTEMPTS: u32 = 20;

    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            placement_attempts: Self::DEFAULT_PLACEMENT_ATTEMPTS,
        }
    }

    pub fn with_placement_attempts(mut self, placement_attempts: u32) -> Self {
        self.placement_attempts = placement_attempts;
        self
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of gated passages to aim for: `clamp(cells / 30, 2, 4)`.
    pub fn blocker_count(&self) -> usize {
        blocker_count_for(self.cell_count())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.placement_attempts == 0 {
            return Err(ConfigError::NoPlacementAttempts);
        }
        Ok(())
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROWS, Self::DEFAULT_COLS)
    }
}

pub(crate) fn blocker_count_for(cells: usize) -> usize {
    (cells / MazeConfig::CELLS_PER_BLOCKER).clamp(MazeConfig::MIN_BLOCKERS, MazeConfig::MAX_BLOCKERS)
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("maze dimensions must be positive (got {rows}x{cols})")]
    EmptyDimensions { rows: usize, cols: usize },

    #[error("placement attempt budget must be at least 1")]
    NoPlacementAttempts,
}

impl MazeError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::EmptyDimensions { .. } => "CONFIG_EMPTY_DIMENSIONS",
            ConfigError::NoPlacementAttempts => "CONFIG_NO_PLACEMENT_ATTEMPTS",
        }
    }
}
