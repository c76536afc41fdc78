/// One of the four cardinal directions a passage can face.
///
/// Rows grow southward and columns grow eastward, so `North` decrements the
/// row and `East` increments the column.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    #[strum(to_string = "north", serialize = "n", serialize = "up")]
    North,
    #[strum(to_string = "south", serialize = "s", serialize = "down")]
    South,
    #[strum(to_string = "east", serialize = "e", serialize = "right")]
    East,
    #[strum(to_string = "west", serialize = "w", serialize = "left")]
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Row/column offset of the neighbouring cell.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}
