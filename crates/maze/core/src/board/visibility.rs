use std::collections::BTreeSet;

use crate::grid::Position;

/// Fog-of-war: the cells disclosed to the presentation layer.
///
/// The set only grows during a round.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visibility {
    revealed: BTreeSet<Position>,
}

impl Visibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a cell revealed. Returns `true` if it was hidden before.
    pub fn reveal(&mut self, position: Position) -> bool {
        self.revealed.insert(position)
    }

    pub fn is_revealed(&self, position: Position) -> bool {
        self.revealed.contains(&position)
    }

    pub fn revealed(&self) -> impl Iterator<Item = Position> + '_ {
        self.revealed.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
