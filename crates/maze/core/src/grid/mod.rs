//! Maze topology: cells, walls, and neighbour lookup.
//!
//! The [`Grid`] only knows about walls. Blockers and collectibles live in the
//! [`ItemRegistry`](crate::board::ItemRegistry) layered on top of it, and
//! [`Board`](crate::board::Board) combines the two.
mod direction;
mod position;
mod walls;

use arrayvec::ArrayVec;

pub use direction::Direction;
pub use position::Position;
pub use walls::Walls;

use crate::error::{ErrorSeverity, MazeError};

/// Directions out of a single cell. A cell has at most four.
pub type DirectionSet = ArrayVec<Direction, 4>;

/// Errors raised while building or mutating grid-level state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    #[error("grid dimensions must be positive (got {rows}x{cols})")]
    EmptyDimensions { rows: usize, cols: usize },

    #[error("position {position} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("no cell lies {direction} of {position}")]
    MissingNeighbor {
        position: Position,
        direction: Direction,
    },

    #[error("passage {direction} of {position} is walled")]
    WalledPassage {
        position: Position,
        direction: Direction,
    },

    #[error("cell {position} already holds a collectible")]
    CellOccupied { position: Position },
}

impl MazeError for GridError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use GridError::*;
        match self {
            EmptyDimensions { .. } => "GRID_EMPTY_DIMENSIONS",
            OutOfBounds { .. } => "GRID_OUT_OF_BOUNDS",
            MissingNeighbor { .. } => "GRID_MISSING_NEIGHBOR",
            WalledPassage { .. } => "GRID_WALLED_PASSAGE",
            CellOccupied { .. } => "GRID_CELL_OCCUPIED",
        }
    }
}

/// Fixed `rows x cols` array of cells, created fully walled.
///
/// Start is the top-left corner and exit the bottom-right corner; both and the
/// dimensions are fixed at construction. Walls only change through
/// [`Grid::remove_wall`], which keeps both sides of a passage in agreement.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Walls>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![Walls::all(); rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn start(&self) -> Position {
        Position::ORIGIN
    }

    pub fn exit(&self) -> Position {
        Position::new(self.rows - 1, self.cols - 1)
    }

    pub fn is_exit(&self, position: Position) -> bool {
        position == self.exit()
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }

    /// Adjacent cell in `direction`, or `None` past the edge of the grid.
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        if !self.in_bounds(position) {
            return None;
        }
        let (dr, dc) = direction.delta();
        let row = position.row.checked_add_signed(dr)?;
        let col = position.col.checked_add_signed(dc)?;
        let next = Position::new(row, col);
        self.in_bounds(next).then_some(next)
    }

    /// Wall flags of a cell. Out-of-bounds positions read as fully walled.
    pub fn walls(&self, position: Position) -> Walls {
        self.index(position)
            .map(|index| self.cells[index])
            .unwrap_or_else(Walls::all)
    }

    pub fn has_wall(&self, position: Position, direction: Direction) -> bool {
        self.walls(position).has(direction)
    }

    /// Opens the passage between `position` and its neighbour in `direction`.
    ///
    /// Both sides are cleared together. Does nothing when the neighbour does
    /// not exist.
    pub fn remove_wall(&mut self, position: Position, direction: Direction) {
        let Some(next) = self.neighbor(position, direction) else {
            return;
        };
        let (Some(here), Some(there)) = (self.index(position), self.index(next)) else {
            return;
        };

        self.cells[here].remove(Walls::side(direction));
        self.cells[there].remove(Walls::side(direction.opposite()));
    }

    /// Directions without a wall. Blockers are not considered.
    pub fn open_directions(&self, position: Position) -> DirectionSet {
        let walls = self.walls(position);
        Direction::ALL
            .into_iter()
            .filter(|direction| !walls.has(*direction))
            .collect()
    }

    /// Number of open passages, counting each passage once.
    pub fn open_passage_count(&self) -> usize {
        self.positions()
            .map(|position| {
                [Direction::South, Direction::East]
                    .into_iter()
                    .filter(|direction| !self.has_wall(position, *direction))
                    .count()
            })
            .sum()
    }

    /// All cell positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    fn index(&self, position: Position) -> Option<usize> {
        // a deserialized grid may carry fewer cells than its dimensions
        self.in_bounds(position)
            .then_some(position.row * self.cols + position.col)
            .filter(|&index| index < self.cells.len())
    }
}
