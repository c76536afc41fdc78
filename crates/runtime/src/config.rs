//! Session parameters and their environment loaders.
use std::env;
use std::path::PathBuf;

use maze_core::MazeConfig;

/// Configuration for a [`Session`](crate::Session) across rounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Dimensions and placement budget of the first round.
    pub maze: MazeConfig,
    /// Fixed seed for reproducible sessions; entropy when absent.
    pub seed: Option<u64>,
    /// Cells added to each side whenever a new round starts.
    pub growth_per_round: usize,
    /// Upper bound on rows and cols after growth.
    pub max_size: usize,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new(MazeConfig::default())
    }
}

impl RuntimeConfig {
    pub const DEFAULT_GROWTH_PER_ROUND: usize = 1;
    pub const DEFAULT_MAX_SIZE: usize = 24;

    pub fn new(maze: MazeConfig) -> Self {
        Self {
            maze,
            seed: None,
            growth_per_round: Self::DEFAULT_GROWTH_PER_ROUND,
            max_size: Self::DEFAULT_MAX_SIZE,
            session_id: None,
            log_dir: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_growth(mut self, growth_per_round: usize, max_size: usize) -> Self {
        self.growth_per_round = growth_per_round;
        self.max_size = max_size;
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MAZE_ROWS` / `MAZE_COLS` - First round dimensions (default: 8x8)
    /// - `MAZE_PLACEMENT_ATTEMPTS` - Gate placement retries (default: 20)
    /// - `MAZE_SEED` - Fixed RNG seed (default: entropy)
    /// - `MAZE_GROWTH_PER_ROUND` - Side growth per round (default: 1)
    /// - `MAZE_MAX_SIZE` - Cap on rows and cols (default: 24)
    /// - `MAZE_SESSION_ID` - Session identifier used for log paths
    /// - `MAZE_LOG_DIR` - Directory for log files
    pub fn from_env() -> Self {
        Self::from_env_with(MazeConfig::default())
    }

    /// Same as [`from_env`](Self::from_env), overlaying variables on `maze`
    /// (typically loaded from a TOML file).
    pub fn from_env_with(maze: MazeConfig) -> Self {
        let mut config = Self::new(maze);

        if let Some(rows) = read_env::<usize>("MAZE_ROWS") {
            config.maze.rows = rows;
        }
        if let Some(cols) = read_env::<usize>("MAZE_COLS") {
            config.maze.cols = cols;
        }
        if let Some(attempts) = read_env::<u32>("MAZE_PLACEMENT_ATTEMPTS") {
            config.maze.placement_attempts = attempts;
        }

        config.seed = read_env::<u64>("MAZE_SEED");

        if let Some(growth) = read_env::<usize>("MAZE_GROWTH_PER_ROUND") {
            config.growth_per_round = growth;
        }
        if let Some(max_size) = read_env::<usize>("MAZE_MAX_SIZE") {
            config.max_size = max_size.max(1);
        }

        config.session_id = env::var("MAZE_SESSION_ID").ok();
        config.log_dir = env::var("MAZE_LOG_DIR").ok().map(PathBuf::from);

        config
    }

    /// Dimensions for the given 1-based round, grown and then capped.
    ///
    /// Growth never shrinks a first round that already exceeds `max_size`.
    pub fn maze_for_round(&self, round: u32) -> MazeConfig {
        let steps = round.saturating_sub(1) as usize;
        let growth = self.growth_per_round.saturating_mul(steps);
        let grow = |side: usize| {
            let grown = side.saturating_add(growth);
            if side >= self.max_size { side } else { grown.min(self.max_size) }
        };
        MazeConfig {
            rows: grow(self.maze.rows),
            cols: grow(self.maze.cols),
            ..self.maze
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
