//! Player commands against the board.
//!
//! Each command is a small struct implementing [`ActionTransition`]; the
//! [`MazeEngine`](crate::engine::MazeEngine) drives the three phases and
//! applies the mutation before returning, so callers never observe a
//! half-applied command.
mod inventory;
mod movement;
mod use_item;

pub use inventory::{DropAction, DropError, PickUpAction, PickUpError};
pub use movement::{MoveAction, MoveError};
pub use use_item::{UseAction, UseError};

use crate::grid::Direction;
use crate::state::MazeState;

/// Defines how a command mutates round state.
///
/// `pre_validate` must reject every command that `apply` cannot carry out, so
/// a failed command leaves the state untouched.
pub trait ActionTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &MazeState) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the command. Implementations may assume `pre_validate` passed.
    fn apply(&self, state: &mut MazeState) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &MazeState) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A command already resolved to a concrete transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(MoveAction),
    PickUp(PickUpAction),
    Drop(DropAction),
    Use(UseAction),
}

impl Action {
    pub fn walk(direction: Direction) -> Self {
        Action::Move(MoveAction::new(direction))
    }

    pub fn pick_up() -> Self {
        Action::PickUp(PickUpAction)
    }

    pub fn drop_item() -> Self {
        Action::Drop(DropAction)
    }

    pub fn use_on(direction: Direction) -> Self {
        Action::Use(UseAction::new(direction))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Move(_) => "move",
            Action::PickUp(_) => "pick_up",
            Action::Drop(_) => "drop",
            Action::Use(_) => "use",
        }
    }
}
