use crate::action::ActionTransition;
use crate::board::{BlockerKind, Obstruction};
use crate::error::{ErrorSeverity, MazeError};
use crate::grid::Direction;
use crate::state::MazeState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("a wall blocks the way {direction}")]
    Wall { direction: Direction },

    #[error("a {blocker} blocks the way {direction}")]
    Blocker {
        direction: Direction,
        blocker: BlockerKind,
    },

    #[error("there is no cell {direction} of here")]
    OutOfBounds { direction: Direction },
}

impl MazeError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MoveError::Wall { .. } | MoveError::Blocker { .. } => ErrorSeverity::Recoverable,
            // the grid edge is always walled, so reaching this means desynced walls
            MoveError::OutOfBounds { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MoveError::Wall { .. } => "MOVE_WALL",
            MoveError::Blocker { .. } => "MOVE_BLOCKER",
            MoveError::OutOfBounds { .. } => "MOVE_OUT_OF_BOUNDS",
        }
    }
}

/// Step one cell in a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub direction: Direction,
}

impl MoveAction {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl ActionTransition for MoveAction {
    type Error = MoveError;

    fn pre_validate(&self, state: &MazeState) -> Result<(), Self::Error> {
        let origin = state.player.position;
        let direction = self.direction;
        match state.board.obstruction(origin, direction) {
            Some(Obstruction::Wall) => return Err(MoveError::Wall { direction }),
            Some(Obstruction::Blocker(blocker)) => {
                return Err(MoveError::Blocker { direction, blocker });
            }
            None => {}
        }

        state
            .board
            .grid()
            .neighbor(origin, direction)
            .map(|_| ())
            .ok_or(MoveError::OutOfBounds { direction })
    }

    fn apply(&self, state: &mut MazeState) -> Result<(), Self::Error> {
        let destination = state
            .board
            .grid()
            .neighbor(state.player.position, self.direction)
            .ok_or(MoveError::OutOfBounds {
                direction: self.direction,
            })?;

        state.player.position = destination;
        state.player.moves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Color};
    use crate::grid::{Grid, Position};

    /// 3x3 grid with only the wall between (1,1) and (1,2) removed.
    fn single_passage() -> MazeState {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.remove_wall(Position::new(1, 1), Direction::East);
        let mut state = MazeState::new(Board::new(grid));
        state.player.position = Position::new(1, 1);
        state
    }

    #[test]
    fn moves_through_open_passage() {
        let mut state = single_passage();
        let action = MoveAction::new(Direction::East);
        action.pre_validate(&state).unwrap();
        action.apply(&mut state).unwrap();
        assert_eq!(state.player.position, Position::new(1, 2));
        assert_eq!(state.player.moves, 1);
    }

    #[test]
    fn wall_rejects_move() {
        let state = single_passage();
        let result = MoveAction::new(Direction::North).pre_validate(&state);
        assert_eq!(
            result,
            Err(MoveError::Wall {
                direction: Direction::North
            })
        );
        assert_eq!(state.player.position, Position::new(1, 1));
        assert_eq!(state.player.moves, 0);
    }

    #[test]
    fn blocker_rejects_move_without_wall() {
        let mut state = single_passage();
        let door = BlockerKind::Door(Color::Red);
        state
            .board
            .place_blocker(Position::new(1, 1), Direction::East, door)
            .unwrap();
        let error = MoveAction::new(Direction::East)
            .pre_validate(&state)
            .unwrap_err();
        assert_eq!(
            error,
            MoveError::Blocker {
                direction: Direction::East,
                blocker: door
            }
        );
        assert_eq!(error.to_string(), "a red door blocks the way east");
        assert!(error.severity().is_recoverable());
    }
}
