//! Round state: the board plus the single player walking it.
//!
//! Presentation layers read [`MazeState::inspect`] and
//! [`MazeState::snapshot`]; every mutation goes through
//! [`MazeEngine`](crate::engine::MazeEngine).
use crate::board::{BlockerKind, Board, ItemKind};
use crate::grid::{Direction, Position, Walls};

/// The actor walking the maze. Inventory holds at most one item.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub position: Position,
    pub held: Option<ItemKind>,
    /// Successful moves so far this round.
    pub moves: u32,
}

impl Player {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            held: None,
            moves: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeState {
    pub board: Board,
    pub player: Player,
}

impl MazeState {
    /// Places a fresh player on the start cell and reveals around it.
    pub fn new(mut board: Board) -> Self {
        let start = board.start();
        board.reveal_from(start);
        Self {
            board,
            player: Player::new(start),
        }
    }

    pub fn has_escaped(&self) -> bool {
        self.board.is_exit(self.player.position)
    }

    /// What the player can learn from where they stand.
    pub fn inspect(&self) -> Inspection {
        let position = self.player.position;
        let exits = self
            .board
            .grid()
            .open_directions(position)
            .into_iter()
            .map(|direction| PassageView {
                direction,
                blocker: self.board.items().blocker_at(position, direction),
            })
            .collect();

        Inspection {
            position,
            exits,
            collectible: self.board.items().collectible_at(position),
            held: self.player.held,
            exit: self.board.revealed_exit(),
            moves: self.player.moves,
        }
    }

    /// Everything a renderer needs, detached from the live board.
    pub fn snapshot(&self) -> BoardSnapshot {
        let grid = self.board.grid();
        let items = self.board.items();
        BoardSnapshot {
            rows: grid.rows(),
            cols: grid.cols(),
            walls: grid.positions().map(|position| grid.walls(position)).collect(),
            blockers: items
                .blockers()
                .map(|(position, direction, kind)| BlockerView {
                    position,
                    direction,
                    kind,
                })
                .collect(),
            collectibles: items
                .collectibles()
                .map(|(position, kind)| CollectibleView { position, kind })
                .collect(),
            revealed: self.board.visibility().revealed().collect(),
            exit: self.board.exit(),
            player: self.player.clone(),
        }
    }
}

/// An unwalled passage out of the current cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassageView {
    pub direction: Direction,
    pub blocker: Option<BlockerKind>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inspection {
    pub position: Position,
    /// Passages without a wall, each with the blocker sitting on it, if any.
    pub exits: Vec<PassageView>,
    pub collectible: Option<ItemKind>,
    pub held: Option<ItemKind>,
    /// Disclosed only once the exit cell has been revealed.
    pub exit: Option<Position>,
    pub moves: u32,
}

impl Inspection {
    /// Directions that can be walked right now.
    pub fn passable(&self) -> impl Iterator<Item = Direction> + '_ {
        self.exits
            .iter()
            .filter(|passage| passage.blocker.is_none())
            .map(|passage| passage.direction)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockerView {
    pub position: Position,
    pub direction: Direction,
    pub kind: BlockerKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectibleView {
    pub position: Position,
    pub kind: ItemKind,
}

/// Read-only copy of the board for presentation layers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major wall flags.
    pub walls: Vec<Walls>,
    pub blockers: Vec<BlockerView>,
    pub collectibles: Vec<CollectibleView>,
    pub revealed: Vec<Position>,
    pub exit: Position,
    pub player: Player,
}

impl BoardSnapshot {
    pub fn walls_at(&self, position: Position) -> Walls {
        if position.row >= self.rows || position.col >= self.cols {
            return Walls::all();
        }
        self.walls
            .get(position.row * self.cols + position.col)
            .copied()
            .unwrap_or_else(Walls::all)
    }

    pub fn is_revealed(&self, position: Position) -> bool {
        self.revealed.binary_search(&position).is_ok()
    }

    pub fn collectible_at(&self, position: Position) -> Option<ItemKind> {
        self.collectibles
            .iter()
            .find(|view| view.position == position)
            .map(|view| view.kind)
    }

    pub fn blocker_at(&self, position: Position, direction: Direction) -> Option<BlockerKind> {
        self.blockers
            .iter()
            .find(|view| view.position == position && view.direction == direction)
            .map(|view| view.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn snapshot_lookups_fail_closed() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.remove_wall(Position::ORIGIN, Direction::East);
        let mut snapshot = MazeState::new(Board::new(grid)).snapshot();
        assert!(!snapshot.walls_at(Position::ORIGIN).has(Direction::East));
        assert_eq!(snapshot.walls_at(Position::new(5, 0)), Walls::all());

        snapshot.walls.truncate(1);
        assert_eq!(snapshot.walls_at(Position::new(1, 1)), Walls::all());
    }
}
