//! Maze rules and generators shared across clients.
//!
//! `maze-core` defines the board (grid walls, item registry, fog-of-war), the
//! generators that carve a perfect maze and gate it with doors and rocks, and
//! the player commands that mutate a finished board. It performs no I/O; all
//! randomness comes from the `Rng` handed to [`generate::build_board`].
//! After generation, every state mutation flows through
//! [`engine::MazeEngine`].
pub mod action;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod generate;
pub mod grid;
pub mod state;

pub use action::{
    Action, ActionTransition, DropAction, DropError, MoveAction, MoveError, PickUpAction,
    PickUpError, UseAction, UseError,
};
pub use board::{BlockerKind, Board, Color, ItemKind, ItemRegistry, Obstruction, Visibility};
pub use config::{ConfigError, MazeConfig};
pub use engine::{ActionOutcome, ExecuteError, MazeEngine, TransitionPhase, TransitionPhaseError};
pub use error::{ErrorSeverity, MazeError};
pub use generate::{
    ItemPlacer, MazeCarver, PlacementReport, RecursiveBacktracker, SolveReport, build_board,
    is_solvable,
};
pub use grid::{Direction, DirectionSet, Grid, GridError, Position, Walls};
pub use state::{
    BlockerView, BoardSnapshot, CollectibleView, Inspection, MazeState, PassageView, Player,
};
