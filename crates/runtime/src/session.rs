//! The round owner.
//!
//! A [`Session`] holds exactly one live board. Commands are applied in full
//! before [`Session::submit`] returns, and [`Session::next_round`] replaces
//! the board wholesale.
use maze_core::{
    Action, ActionOutcome, BoardSnapshot, ExecuteError, Inspection, MazeCarver, MazeConfig,
    MazeEngine, MazeError, MazeState, PlacementReport, RecursiveBacktracker, build_board,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::api::{Command, Result, RuntimeError};
use crate::config::RuntimeConfig;

/// Summary of a freshly built round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundInfo {
    pub round: u32,
    pub rows: usize,
    pub cols: usize,
    /// Gated passages on this board; zero for an item-free maze.
    pub gates: usize,
    pub attempts: u32,
}

/// What [`Session::submit`] did with a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandReport {
    Acted(ActionOutcome),
    /// The board refused the action; nothing changed.
    Refused(ExecuteError),
    Inspected(Inspection),
    Snapshot(Box<BoardSnapshot>),
    NewRound(RoundInfo),
    Quit,
}

pub struct Session<C = RecursiveBacktracker> {
    config: RuntimeConfig,
    carver: C,
    rng: StdRng,
    round: u32,
    maze: MazeConfig,
    state: MazeState,
    placement: PlacementReport,
    escaped: bool,
}

impl Session<RecursiveBacktracker> {
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        Self::with_carver(config, RecursiveBacktracker)
    }
}

impl<C: MazeCarver> Session<C> {
    /// Starts round 1 with the given carver.
    pub fn with_carver(config: RuntimeConfig, carver: C) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let maze = config.maze_for_round(1);
        let (state, placement) = build_round(&maze, &carver, &mut rng)?;

        let escaped = state.has_escaped();
        let session = Self {
            config,
            carver,
            rng,
            round: 1,
            maze,
            state,
            placement,
            escaped,
        };
        session.log_round();
        Ok(session)
    }

    /// Discards the current board and builds the next, larger round.
    pub fn next_round(&mut self) -> Result<RoundInfo> {
        let round = self.round.saturating_add(1);
        let maze = self.config.maze_for_round(round);
        let (state, placement) = build_round(&maze, &self.carver, &mut self.rng)?;

        self.round = round;
        self.maze = maze;
        self.escaped = state.has_escaped();
        self.state = state;
        self.placement = placement;
        self.log_round();
        Ok(self.round_info())
    }

    pub fn submit(&mut self, command: Command) -> Result<CommandReport> {
        match command {
            Command::Act(action) => self.act(action),
            Command::Look => Ok(CommandReport::Inspected(self.state.inspect())),
            Command::Dump => Ok(CommandReport::Snapshot(Box::new(self.state.snapshot()))),
            Command::NewRound => self.next_round().map(CommandReport::NewRound),
            Command::Quit => {
                info!(round = self.round, moves = self.state.player.moves, "session ended");
                Ok(CommandReport::Quit)
            }
        }
    }

    fn act(&mut self, action: Action) -> Result<CommandReport> {
        if self.escaped {
            return Err(RuntimeError::RoundOver { round: self.round });
        }

        match MazeEngine::new(&mut self.state).execute(&action) {
            Ok(outcome) => {
                debug!(
                    target: "runtime::session",
                    action = action.as_str(),
                    position = %outcome.position,
                    revealed = outcome.revealed,
                    "command applied"
                );
                if outcome.reached_exit {
                    self.escaped = true;
                    info!(round = self.round, moves = outcome.moves, "exit reached");
                }
                Ok(CommandReport::Acted(outcome))
            }
            Err(error) if error.severity().is_internal() => {
                warn!(
                    target: "runtime::session",
                    action = action.as_str(),
                    phase = error.phase().as_str(),
                    code = error.error_code(),
                    error = %error,
                    "command failed after validation"
                );
                Ok(CommandReport::Refused(error))
            }
            Err(error) => {
                debug!(
                    target: "runtime::session",
                    action = action.as_str(),
                    severity = error.severity().as_str(),
                    code = error.error_code(),
                    error = %error,
                    "command refused"
                );
                Ok(CommandReport::Refused(error))
            }
        }
    }

    pub fn state(&self) -> &MazeState {
        &self.state
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// True once the exit has been reached this round.
    pub fn is_escaped(&self) -> bool {
        self.escaped
    }

    pub fn placement(&self) -> PlacementReport {
        self.placement
    }

    pub fn round_info(&self) -> RoundInfo {
        RoundInfo {
            round: self.round,
            rows: self.maze.rows,
            cols: self.maze.cols,
            gates: self.placement.gates,
            attempts: self.placement.attempts,
        }
    }

    fn log_round(&self) {
        info!(
            round = self.round,
            rows = self.maze.rows,
            cols = self.maze.cols,
            gates = self.placement.gates,
            attempts = self.placement.attempts,
            "round started"
        );
        if self.escaped {
            info!(round = self.round, moves = 0, "exit reached");
        }
    }
}

fn build_round<C: MazeCarver>(
    maze: &MazeConfig,
    carver: &C,
    rng: &mut StdRng,
) -> Result<(MazeState, PlacementReport)> {
    let (board, placement) = build_board(maze, carver, rng)?;
    Ok((MazeState::new(board), placement))
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{Direction, Grid, Position};
    use rand::Rng;

    /// Opens a straight corridor along the top row.
    struct Corridor;

    impl MazeCarver for Corridor {
        fn carve<R: Rng + ?Sized>(&self, grid: &mut Grid, _rng: &mut R) {
            for col in 0..grid.cols().saturating_sub(1) {
                grid.remove_wall(Position::new(0, col), Direction::East);
            }
        }
    }

    fn seeded(rows: usize, cols: usize) -> RuntimeConfig {
        RuntimeConfig::new(MazeConfig::new(rows, cols)).with_seed(11)
    }

    #[test]
    fn new_session_starts_on_round_one() {
        let session = Session::new(seeded(6, 6)).unwrap();
        assert_eq!(session.round(), 1);
        assert_eq!(session.state().player.position, Position::ORIGIN);
        assert!(session.state().board.visibility().is_revealed(Position::ORIGIN));
        assert!(!session.is_escaped());
    }

    #[test]
    fn invalid_dimensions_are_rejected() {
        let error = Session::new(seeded(0, 4)).err().unwrap();
        assert!(matches!(error, RuntimeError::Config(_)));
        assert_eq!(error.error_code(), "CONFIG_EMPTY_DIMENSIONS");
    }

    #[test]
    fn refused_moves_are_reported_not_raised() {
        let mut session = Session::with_carver(seeded(1, 3), Corridor).unwrap();
        let report = session
            .submit(Command::Act(Action::walk(Direction::North)))
            .unwrap();
        assert!(matches!(report, CommandReport::Refused(ExecuteError::Move(_))));
        assert_eq!(session.state().player.moves, 0);
    }

    #[test]
    fn reaching_the_exit_closes_the_round() {
        let mut session = Session::with_carver(seeded(1, 3), Corridor).unwrap();
        for _ in 0..2 {
            session
                .submit(Command::Act(Action::walk(Direction::East)))
                .unwrap();
        }
        assert!(session.is_escaped());
        assert_eq!(
            session.submit(Command::Act(Action::walk(Direction::West))),
            Err(RuntimeError::RoundOver { round: 1 })
        );

        let report = session.submit(Command::NewRound).unwrap();
        let CommandReport::NewRound(info) = report else {
            panic!("expected a new round, got {report:?}");
        };
        assert_eq!(info.round, 2);
        assert!(!session.is_escaped());
        assert_eq!(session.state().player.position, Position::ORIGIN);
    }

    #[test]
    fn rounds_grow_up_to_the_cap() {
        let config = seeded(3, 4).with_growth(2, 6);
        let mut session = Session::new(config).unwrap();
        let second = session.next_round().unwrap();
        assert_eq!((second.rows, second.cols), (5, 6));
        let third = session.next_round().unwrap();
        assert_eq!((third.rows, third.cols), (6, 6));
        assert_eq!(session.state().board.grid().rows(), 6);
    }

    #[test]
    fn look_and_dump_do_not_mutate() {
        let mut session = Session::new(seeded(5, 5)).unwrap();
        let before = session.state().clone();
        let CommandReport::Inspected(view) = session.submit(Command::Look).unwrap() else {
            panic!("look should inspect");
        };
        assert_eq!(view.position, Position::ORIGIN);
        let CommandReport::Snapshot(snapshot) = session.submit(Command::Dump).unwrap() else {
            panic!("dump should snapshot");
        };
        assert_eq!((snapshot.rows, snapshot.cols), (5, 5));
        assert_eq!(session.state(), &before);
    }
}
