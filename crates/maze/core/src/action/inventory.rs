use crate::action::ActionTransition;
use crate::board::ItemKind;
use crate::error::{ErrorSeverity, MazeError};
use crate::state::MazeState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PickUpError {
    #[error("hands are full: already holding the {held}")]
    HandsFull { held: ItemKind },

    #[error("there is nothing here to pick up")]
    NothingHere,
}

impl MazeError for PickUpError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            PickUpError::HandsFull { .. } => "PICK_UP_HANDS_FULL",
            PickUpError::NothingHere => "PICK_UP_NOTHING_HERE",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DropError {
    #[error("not holding anything")]
    EmptyHands,

    #[error("a {present} already lies here")]
    CellOccupied { present: ItemKind },
}

impl MazeError for DropError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            DropError::EmptyHands => "DROP_EMPTY_HANDS",
            DropError::CellOccupied { .. } => "DROP_CELL_OCCUPIED",
        }
    }
}

/// Move the collectible under the player into their single inventory slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickUpAction;

impl ActionTransition for PickUpAction {
    type Error = PickUpError;

    fn pre_validate(&self, state: &MazeState) -> Result<(), Self::Error> {
        if let Some(held) = state.player.held {
            return Err(PickUpError::HandsFull { held });
        }
        state
            .board
            .items()
            .collectible_at(state.player.position)
            .map(|_| ())
            .ok_or(PickUpError::NothingHere)
    }

    fn apply(&self, state: &mut MazeState) -> Result<(), Self::Error> {
        let item = state
            .board
            .take_collectible(state.player.position)
            .ok_or(PickUpError::NothingHere)?;
        state.player.held = Some(item);
        Ok(())
    }
}

/// Put the held item down on the current cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropAction;

impl ActionTransition for DropAction {
    type Error = DropError;

    fn pre_validate(&self, state: &MazeState) -> Result<(), Self::Error> {
        if state.player.held.is_none() {
            return Err(DropError::EmptyHands);
        }
        match state.board.items().collectible_at(state.player.position) {
            Some(present) => Err(DropError::CellOccupied { present }),
            None => Ok(()),
        }
    }

    fn apply(&self, state: &mut MazeState) -> Result<(), Self::Error> {
        let item = state.player.held.ok_or(DropError::EmptyHands)?;
        let position = state.player.position;
        state
            .board
            .place_collectible(position, item)
            .map_err(|_| DropError::CellOccupied { present: item })?;
        state.player.held = None;
        Ok(())
    }
}
