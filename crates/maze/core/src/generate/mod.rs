//! Board generation: carving, gate placement, and the solvability search.
//!
//! A round's board is produced by [`build_board`]: construct a fully walled
//! grid, carve it, then place gates. Every step draws from the caller's `Rng`.
mod carver;
pub mod paths;
mod placer;
pub mod solver;

use rand::Rng;

pub use carver::{MazeCarver, RecursiveBacktracker};
pub use placer::{ItemPlacer, PlacementReport};
pub use solver::{SolveReport, is_solvable};

use crate::board::Board;
use crate::config::{ConfigError, MazeConfig};
use crate::grid::Grid;

/// Builds a ready board for one round and reveals the start.
pub fn build_board<C, R>(
    config: &MazeConfig,
    carver: &C,
    rng: &mut R,
) -> Result<(Board, PlacementReport), ConfigError>
where
    C: MazeCarver,
    R: Rng + ?Sized,
{
    config.validate()?;
    let mut grid = Grid::new(config.rows, config.cols).map_err(|_| ConfigError::EmptyDimensions {
        rows: config.rows,
        cols: config.cols,
    })?;
    carver.carve(&mut grid, rng);

    let mut board = Board::new(grid);
    let report = ItemPlacer::from_config(config).place(&mut board, rng);
    let start = board.start();
    board.reveal_from(start);

    tracing::debug!(
        rows = config.rows,
        cols = config.cols,
        gates = report.gates,
        attempts = report.attempts,
        "board built"
    );
    Ok((board, report))
}
