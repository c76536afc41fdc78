use bitflags::bitflags;

use super::Direction;

bitflags! {
    /// Intact walls of a single cell. A set bit means the side is impassable.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Walls: u8 {
        const NORTH = 1 << 0;
        const SOUTH = 1 << 1;
        const EAST  = 1 << 2;
        const WEST  = 1 << 3;
    }
}

impl Walls {
    pub const fn side(direction: Direction) -> Walls {
        match direction {
            Direction::North => Walls::NORTH,
            Direction::South => Walls::SOUTH,
            Direction::East => Walls::EAST,
            Direction::West => Walls::WEST,
        }
    }

    pub fn has(self, direction: Direction) -> bool {
        self.contains(Walls::side(direction))
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::all()
    }
}
