//! Terminal client entry point.
mod logging;
mod render;
mod repl;

use std::path::Path;

use anyhow::{Context, Result};
use maze_content::ConfigLoader;
use maze_core::MazeConfig;
use maze_runtime::{RuntimeConfig, Session};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let maze = match std::env::var("MAZE_CONFIG") {
        Ok(path) => ConfigLoader::load(Path::new(&path))?,
        Err(_) => MazeConfig::default(),
    };
    let config = RuntimeConfig::from_env_with(maze);

    let _guard = logging::setup(&config)?;

    let mut session = Session::new(config).context("failed to start the first round")?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    repl::run(&mut session, stdin.lock(), &mut stdout)
}
