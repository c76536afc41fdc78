use crate::action::ActionTransition;
use crate::board::{BlockerKind, ItemKind};
use crate::error::{ErrorSeverity, MazeError};
use crate::grid::Direction;
use crate::state::MazeState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UseError {
    #[error("not holding anything to use")]
    EmptyHands,

    #[error("nothing blocks the way {direction}")]
    NoBlocker { direction: Direction },

    #[error("no matching item: the {held} does nothing to the {blocker}")]
    Mismatch { held: ItemKind, blocker: BlockerKind },

    #[error("the {blocker} behind the way {direction} survived being cleared")]
    BlockerRemains {
        direction: Direction,
        blocker: BlockerKind,
    },
}

impl MazeError for UseError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            UseError::BlockerRemains { .. } => ErrorSeverity::Internal,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            UseError::EmptyHands => "USE_EMPTY_HANDS",
            UseError::NoBlocker { .. } => "USE_NO_BLOCKER",
            UseError::Mismatch { .. } => "USE_MISMATCH",
            UseError::BlockerRemains { .. } => "USE_BLOCKER_REMAINS",
        }
    }
}

/// Spend the held item on the blocker of an adjacent passage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseAction {
    pub direction: Direction,
}

impl UseAction {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl ActionTransition for UseAction {
    type Error = UseError;

    fn pre_validate(&self, state: &MazeState) -> Result<(), Self::Error> {
        let held = state.player.held.ok_or(UseError::EmptyHands)?;
        let blocker = state
            .board
            .items()
            .blocker_at(state.player.position, self.direction)
            .ok_or(UseError::NoBlocker {
                direction: self.direction,
            })?;

        if held.clears(blocker) {
            Ok(())
        } else {
            Err(UseError::Mismatch { held, blocker })
        }
    }

    fn apply(&self, state: &mut MazeState) -> Result<(), Self::Error> {
        state
            .board
            .remove_blocker(state.player.position, self.direction)
            .ok_or(UseError::NoBlocker {
                direction: self.direction,
            })?;
        state.player.held = None;
        Ok(())
    }

    fn post_validate(&self, state: &MazeState) -> Result<(), Self::Error> {
        // the far side must have been cleared with the near side
        let far_side = state
            .board
            .grid()
            .neighbor(state.player.position, self.direction)
            .and_then(|next| state.board.items().blocker_at(next, self.direction.opposite()));
        match far_side {
            None => Ok(()),
            Some(blocker) => Err(UseError::BlockerRemains {
                direction: self.direction,
                blocker,
            }),
        }
    }
}
