//! Command execution pipeline.
//!
//! The [`MazeEngine`] is the only writer of [`MazeState`] after generation.
//! Every command runs pre_validate → apply → post_validate, and the visibility
//! reveal is re-run after anything that can expose new passages.
mod errors;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, ActionTransition};
use crate::board::ItemKind;
use crate::grid::Position;
use crate::state::MazeState;

type TransitionResult<E> = Result<(), TransitionPhaseError<E>>;

/// What a successful command changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    pub action: Action,
    pub position: Position,
    pub held: Option<ItemKind>,
    pub moves: u32,
    /// Cells newly revealed by this command.
    pub revealed: usize,
    pub reached_exit: bool,
}

pub struct MazeEngine<'a> {
    state: &'a mut MazeState,
}

impl<'a> MazeEngine<'a> {
    pub fn new(state: &'a mut MazeState) -> Self {
        Self { state }
    }

    pub fn execute(&mut self, action: &Action) -> Result<ActionOutcome, ExecuteError> {
        match action {
            Action::Move(transition) => {
                drive_transition(transition, self.state).map_err(ExecuteError::Move)?
            }
            Action::PickUp(transition) => {
                drive_transition(transition, self.state).map_err(ExecuteError::PickUp)?
            }
            Action::Drop(transition) => {
                drive_transition(transition, self.state).map_err(ExecuteError::Drop)?
            }
            Action::Use(transition) => {
                drive_transition(transition, self.state).map_err(ExecuteError::Use)?
            }
        }

        let revealed = match action {
            Action::Move(_) | Action::Use(_) => {
                let position = self.state.player.position;
                self.state.board.reveal_from(position)
            }
            Action::PickUp(_) | Action::Drop(_) => 0,
        };

        Ok(ActionOutcome {
            action: *action,
            position: self.state.player.position,
            held: self.state.player.held,
            moves: self.state.player.moves,
            revealed,
            reached_exit: self.state.has_escaped(),
        })
    }
}

#[inline]
fn drive_transition<T>(transition: &T, state: &mut MazeState) -> TransitionResult<T::Error>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))
}
