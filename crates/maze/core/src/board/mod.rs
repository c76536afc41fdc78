//! The board: grid topology plus the item registry and fog-of-war.
//!
//! [`Board`] is the single owned aggregate for one round. Generators mutate it
//! while it is being built; afterwards walls never change, and only the
//! registry (pickups, drops, cleared blockers) and visibility move.
mod items;
mod registry;
mod visibility;

pub use items::{BlockerKind, Color, ItemKind};
pub use registry::ItemRegistry;
pub use visibility::Visibility;

use crate::grid::{Direction, DirectionSet, Grid, GridError, Position};

/// Why a passage cannot be crossed right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Obstruction {
    /// Intact wall, or the edge of the grid.
    Wall,
    Blocker(BlockerKind),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    items: ItemRegistry,
    visibility: Visibility,
}

impl Board {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            items: ItemRegistry::new(),
            visibility: Visibility::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable topology, for carvers. Walls must not change once items exist.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn items(&self) -> &ItemRegistry {
        &self.items
    }

    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    pub fn start(&self) -> Position {
        self.grid.start()
    }

    pub fn exit(&self) -> Position {
        self.grid.exit()
    }

    pub fn is_exit(&self, position: Position) -> bool {
        self.grid.is_exit(position)
    }

    /// What stops movement across a passage, if anything.
    pub fn obstruction(&self, position: Position, direction: Direction) -> Option<Obstruction> {
        if self.grid.has_wall(position, direction) {
            return Some(Obstruction::Wall);
        }
        self.items
            .blocker_at(position, direction)
            .map(Obstruction::Blocker)
    }

    /// True if a wall is intact or a blocker sits on the passage.
    pub fn is_blocked(&self, position: Position, direction: Direction) -> bool {
        self.obstruction(position, direction).is_some()
    }

    /// Directions that can be walked right now, walls and blockers both considered.
    pub fn passable_directions(&self, position: Position) -> DirectionSet {
        Direction::ALL
            .into_iter()
            .filter(|direction| !self.is_blocked(position, *direction))
            .collect()
    }

    // ===== registry mutation =====

    pub fn place_collectible(&mut self, position: Position, item: ItemKind) -> Result<(), GridError> {
        self.items.place_collectible(&self.grid, position, item)
    }

    pub fn take_collectible(&mut self, position: Position) -> Option<ItemKind> {
        self.items.take_collectible(position)
    }

    pub fn place_blocker(
        &mut self,
        position: Position,
        direction: Direction,
        kind: BlockerKind,
    ) -> Result<(), GridError> {
        self.items.place_blocker(&self.grid, position, direction, kind)
    }

    pub fn remove_blocker(&mut self, position: Position, direction: Direction) -> Option<BlockerKind> {
        self.items.remove_blocker(&self.grid, position, direction)
    }

    pub fn clear_items(&mut self) {
        self.items.clear();
    }

    // ===== fog of war =====

    /// Reveals `position` and every neighbour one open, unblocked hop away.
    ///
    /// Returns the number of cells that were newly revealed.
    pub fn reveal_from(&mut self, position: Position) -> usize {
        if !self.grid.in_bounds(position) {
            return 0;
        }
        let mut newly = usize::from(self.visibility.reveal(position));
        for direction in self.passable_directions(position) {
            if let Some(next) = self.grid.neighbor(position, direction) {
                newly += usize::from(self.visibility.reveal(next));
            }
        }
        newly
    }

    /// The exit position, disclosed only once the exit cell has been revealed.
    pub fn revealed_exit(&self) -> Option<Position> {
        let exit = self.exit();
        self.visibility.is_revealed(exit).then_some(exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3x3 grid with a horizontal corridor across the middle row.
    fn corridor() -> Board {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.remove_wall(Position::new(1, 0), Direction::East);
        grid.remove_wall(Position::new(1, 1), Direction::East);
        Board::new(grid)
    }

    #[test]
    fn obstruction_distinguishes_wall_from_blocker() {
        let mut board = corridor();
        let middle = Position::new(1, 1);
        board
            .place_blocker(middle, Direction::East, BlockerKind::Rock)
            .unwrap();

        assert_eq!(board.obstruction(middle, Direction::North), Some(Obstruction::Wall));
        assert_eq!(
            board.obstruction(middle, Direction::East),
            Some(Obstruction::Blocker(BlockerKind::Rock))
        );
        assert_eq!(board.obstruction(middle, Direction::West), None);
        assert_eq!(board.passable_directions(middle).as_slice(), &[Direction::West]);
        // the topology query ignores blockers
        assert_eq!(board.grid().open_directions(middle).len(), 2);
    }

    #[test]
    fn reveal_spreads_one_hop_through_open_unblocked_passages() {
        let mut board = corridor();
        board
            .place_blocker(Position::new(1, 1), Direction::East, BlockerKind::Door(Color::Red))
            .unwrap();

        let newly = board.reveal_from(Position::new(1, 0));
        assert_eq!(newly, 2);
        assert!(board.visibility().is_revealed(Position::new(1, 0)));
        assert!(board.visibility().is_revealed(Position::new(1, 1)));
        assert!(!board.visibility().is_revealed(Position::new(1, 2)));

        // blocked by the door
        board.reveal_from(Position::new(1, 1));
        assert!(!board.visibility().is_revealed(Position::new(1, 2)));

        board.remove_blocker(Position::new(1, 1), Direction::East);
        assert_eq!(board.reveal_from(Position::new(1, 1)), 1);
        assert!(board.visibility().is_revealed(Position::new(1, 2)));
        assert_eq!(board.visibility().len(), 3);
    }

    #[test]
    fn exit_is_disclosed_only_after_reveal() {
        let mut grid = Grid::new(1, 2).unwrap();
        grid.remove_wall(Position::ORIGIN, Direction::East);
        let mut board = Board::new(grid);
        assert_eq!(board.revealed_exit(), None);
        board.reveal_from(Position::ORIGIN);
        assert_eq!(board.revealed_exit(), Some(Position::new(0, 1)));
    }
}
