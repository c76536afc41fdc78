//! Collectible and blocker kinds, and the rule pairing them.
use std::fmt;

/// Colour shared by a key and the door it opens.
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
pub enum Color {
    Red,
    Blue,
    Green,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Blue, Color::Green];
}

/// Item resting on a cell or held by the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemKind {
    Key(Color),
    Dynamite,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [
        ItemKind::Key(Color::Red),
        ItemKind::Key(Color::Blue),
        ItemKind::Key(Color::Green),
        ItemKind::Dynamite,
    ];

    /// A key clears the door of its own colour and dynamite clears the rock.
    /// Nothing else pairs.
    pub const fn clears(self, blocker: BlockerKind) -> bool {
        match (self, blocker) {
            (ItemKind::Key(key), BlockerKind::Door(door)) => key as u8 == door as u8,
            (ItemKind::Dynamite, BlockerKind::Rock) => true,
            _ => false,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Key(color) => write!(f, "{color} key"),
            ItemKind::Dynamite => f.write_str("dynamite"),
        }
    }
}

/// Obstacle sitting on an otherwise open passage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BlockerKind {
    Door(Color),
    Rock,
}

impl BlockerKind {
    pub const ALL: [BlockerKind; 4] = [
        BlockerKind::Door(Color::Red),
        BlockerKind::Door(Color::Blue),
        BlockerKind::Door(Color::Green),
        BlockerKind::Rock,
    ];

    /// The one item that clears this blocker.
    pub const fn cleared_by(self) -> ItemKind {
        match self {
            BlockerKind::Door(color) => ItemKind::Key(color),
            BlockerKind::Rock => ItemKind::Dynamite,
        }
    }

    pub const fn is_door(self) -> bool {
        matches!(self, BlockerKind::Door(_))
    }
}

impl fmt::Display for BlockerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockerKind::Door(color) => write!(f, "{color} door"),
            BlockerKind::Rock => f.write_str("rock"),
        }
    }
}
