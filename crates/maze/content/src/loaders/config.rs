//! Maze configuration loader.

use std::path::Path;

use maze_core::MazeConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for round configuration from TOML files.
///
/// Every field is optional; missing ones take the [`MazeConfig`] defaults.
///
/// ```toml
/// rows = 12
/// cols = 16
/// placement_attempts = 30
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a config from a TOML file.
    pub fn load(path: &Path) -> LoadResult<MazeConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid maze config {}: {}", path.display(), e))
    }

    /// Parse and validate a config from TOML text.
    pub fn parse(content: &str) -> LoadResult<MazeConfig> {
        let config: MazeConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}
