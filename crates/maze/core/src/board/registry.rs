use std::collections::BTreeMap;

use crate::grid::{Direction, Grid, GridError, Position};

use super::{BlockerKind, ItemKind};

/// Collectibles keyed by cell and blockers keyed by directed passage.
///
/// A blocker is registered once from each side of its passage so a lookup
/// from either cell succeeds. The two entries are always added and removed
/// together.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ItemRegistry {
    collectibles: BTreeMap<Position, ItemKind>,
    blockers: BTreeMap<(Position, Direction), BlockerKind>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.collectibles.clear();
        self.blockers.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.collectibles.is_empty() && self.blockers.is_empty()
    }

    // ===== collectibles =====

    pub fn collectible_at(&self, position: Position) -> Option<ItemKind> {
        self.collectibles.get(&position).copied()
    }

    pub fn collectibles(&self) -> impl Iterator<Item = (Position, ItemKind)> + '_ {
        self.collectibles.iter().map(|(position, item)| (*position, *item))
    }

    pub fn collectible_count(&self) -> usize {
        self.collectibles.len()
    }

    /// Rests `item` on `position`. A cell holds at most one collectible.
    pub fn place_collectible(
        &mut self,
        grid: &Grid,
        position: Position,
        item: ItemKind,
    ) -> Result<(), GridError> {
        if !grid.in_bounds(position) {
            return Err(GridError::OutOfBounds {
                position,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        if self.collectibles.contains_key(&position) {
            return Err(GridError::CellOccupied { position });
        }
        self.collectibles.insert(position, item);
        Ok(())
    }

    pub fn take_collectible(&mut self, position: Position) -> Option<ItemKind> {
        self.collectibles.remove(&position)
    }

    // ===== blockers =====

    pub fn blocker_at(&self, position: Position, direction: Direction) -> Option<BlockerKind> {
        self.blockers.get(&(position, direction)).copied()
    }

    /// Every directed blocker entry. Each gate appears twice, once per side.
    pub fn blockers(&self) -> impl Iterator<Item = (Position, Direction, BlockerKind)> + '_ {
        self.blockers
            .iter()
            .map(|((position, direction), kind)| (*position, *direction, *kind))
    }

    /// Number of directed entries, i.e. twice the number of gates.
    pub fn blocker_count(&self) -> usize {
        self.blockers.len()
    }

    /// Gates the open passage `direction` of `position` on both sides.
    pub fn place_blocker(
        &mut self,
        grid: &Grid,
        position: Position,
        direction: Direction,
        kind: BlockerKind,
    ) -> Result<(), GridError> {
        let neighbor = grid
            .neighbor(position, direction)
            .ok_or(GridError::MissingNeighbor {
                position,
                direction,
            })?;
        if grid.has_wall(position, direction) {
            return Err(GridError::WalledPassage {
                position,
                direction,
            });
        }

        self.blockers.insert((position, direction), kind);
        self.blockers.insert((neighbor, direction.opposite()), kind);
        Ok(())
    }

    /// Removes the gate on a passage from both sides, returning its kind.
    pub fn remove_blocker(
        &mut self,
        grid: &Grid,
        position: Position,
        direction: Direction,
    ) -> Option<BlockerKind> {
        let kind = self.blockers.remove(&(position, direction))?;
        if let Some(neighbor) = grid.neighbor(position, direction) {
            self.blockers.remove(&(neighbor, direction.opposite()));
        }
        Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    fn open_grid() -> Grid {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.remove_wall(Position::ORIGIN, Direction::East);
        grid
    }

    #[test]
    fn blockers_are_registered_from_both_sides() {
        let grid = open_grid();
        let mut registry = ItemRegistry::new();
        registry
            .place_blocker(&grid, Position::ORIGIN, Direction::East, BlockerKind::Rock)
            .unwrap();

        assert_eq!(
            registry.blocker_at(Position::ORIGIN, Direction::East),
            Some(BlockerKind::Rock)
        );
        assert_eq!(
            registry.blocker_at(Position::new(0, 1), Direction::West),
            Some(BlockerKind::Rock)
        );
        assert_eq!(registry.blocker_count(), 2);

        let removed = registry.remove_blocker(&grid, Position::new(0, 1), Direction::West);
        assert_eq!(removed, Some(BlockerKind::Rock));
        assert_eq!(registry.blocker_count(), 0);
    }

    #[test]
    fn blockers_require_an_open_passage() {
        let grid = open_grid();
        let mut registry = ItemRegistry::new();
        let door = BlockerKind::Door(Color::Red);

        assert!(matches!(
            registry.place_blocker(&grid, Position::ORIGIN, Direction::South, door),
            Err(GridError::WalledPassage { .. })
        ));
        assert!(matches!(
            registry.place_blocker(&grid, Position::ORIGIN, Direction::North, door),
            Err(GridError::MissingNeighbor { .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn one_collectible_per_cell() {
        let grid = open_grid();
        let mut registry = ItemRegistry::new();
        let cell = Position::new(1, 0);
        registry
            .place_collectible(&grid, cell, ItemKind::Dynamite)
            .unwrap();
        assert_eq!(
            registry.place_collectible(&grid, cell, ItemKind::Key(Color::Blue)),
            Err(GridError::CellOccupied { position: cell })
        );
        assert_eq!(registry.take_collectible(cell), Some(ItemKind::Dynamite));
        assert_eq!(registry.take_collectible(cell), None);
    }
}
