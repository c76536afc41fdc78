//! Plain ASCII view of a board snapshot.
//!
//! Only revealed cells show their contents. A boundary is drawn when at least
//! one of the cells it separates has been revealed; fully hidden boundaries
//! render as `#`.
use maze_core::{BlockerKind, BoardSnapshot, Color, Direction, ItemKind, Position};

const HIDDEN_BODY: &str = "###";

pub fn render(snapshot: &BoardSnapshot) -> String {
    let mut out = String::new();
    for row in 0..snapshot.rows {
        horizontal_boundary(snapshot, row, Direction::North, &mut out);
        cell_row(snapshot, row, &mut out);
    }
    if let Some(last) = snapshot.rows.checked_sub(1) {
        horizontal_boundary(snapshot, last, Direction::South, &mut out);
    }
    out
}

/// Legend printed under the map.
pub const LEGEND: &str =
    "@ you  E exit  r/b/g key  * dynamite  R/B/G door  O rock  # unexplored";

fn horizontal_boundary(snapshot: &BoardSnapshot, row: usize, side: Direction, out: &mut String) {
    out.push('+');
    for col in 0..snapshot.cols {
        let position = Position::new(row, col);
        let segment = if !boundary_visible(snapshot, position, side) {
            HIDDEN_BODY.to_string()
        } else if let Some(blocker) = snapshot.blocker_at(position, side) {
            format!(" {} ", blocker_glyph(blocker))
        } else if snapshot.walls_at(position).has(side) {
            "---".to_string()
        } else {
            "   ".to_string()
        };
        out.push_str(&segment);
        out.push('+');
    }
    out.push('\n');
}

fn cell_row(snapshot: &BoardSnapshot, row: usize, out: &mut String) {
    let west = Position::new(row, 0);
    out.push(vertical_glyph(snapshot, west, Direction::West));
    for col in 0..snapshot.cols {
        let position = Position::new(row, col);
        out.push_str(&cell_body(snapshot, position));
        out.push(vertical_glyph(snapshot, position, Direction::East));
    }
    out.push('\n');
}

fn vertical_glyph(snapshot: &BoardSnapshot, position: Position, side: Direction) -> char {
    if !boundary_visible(snapshot, position, side) {
        '#'
    } else if let Some(blocker) = snapshot.blocker_at(position, side) {
        blocker_glyph(blocker)
    } else if snapshot.walls_at(position).has(side) {
        '|'
    } else {
        ' '
    }
}

fn cell_body(snapshot: &BoardSnapshot, position: Position) -> String {
    if !snapshot.is_revealed(position) {
        return HIDDEN_BODY.to_string();
    }
    let glyph = if snapshot.player.position == position {
        '@'
    } else if snapshot.exit == position {
        'E'
    } else if let Some(item) = snapshot.collectible_at(position) {
        item_glyph(item)
    } else {
        ' '
    };
    format!(" {glyph} ")
}

fn boundary_visible(snapshot: &BoardSnapshot, position: Position, side: Direction) -> bool {
    if snapshot.is_revealed(position) {
        return true;
    }
    let (dr, dc) = side.delta();
    let neighbor = position
        .row
        .checked_add_signed(dr)
        .zip(position.col.checked_add_signed(dc))
        .map(|(row, col)| Position::new(row, col))
        .filter(|next| next.row < snapshot.rows && next.col < snapshot.cols);
    neighbor.is_some_and(|next| snapshot.is_revealed(next))
}

fn item_glyph(item: ItemKind) -> char {
    match item {
        ItemKind::Key(color) => color_glyph(color).to_ascii_lowercase(),
        ItemKind::Dynamite => '*',
    }
}

fn blocker_glyph(blocker: BlockerKind) -> char {
    match blocker {
        BlockerKind::Door(color) => color_glyph(color),
        BlockerKind::Rock => 'O',
    }
}

const fn color_glyph(color: Color) -> char {
    match color {
        Color::Red => 'R',
        Color::Blue => 'B',
        Color::Green => 'G',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{Board, Grid, MazeState};

    fn corridor(cols: usize) -> Board {
        let mut grid = Grid::new(1, cols).unwrap();
        for col in 0..cols - 1 {
            grid.remove_wall(Position::new(0, col), Direction::East);
        }
        Board::new(grid)
    }

    #[test]
    fn unexplored_cells_stay_hidden() {
        let state = MazeState::new(corridor(3));
        let map = render(&state.snapshot());
        let lines: Vec<&str> = map.lines().collect();
        assert_eq!(lines, vec!["+---+---+###+", "| @      ####", "+---+---+###+"]);
    }

    #[test]
    fn gates_and_items_use_their_glyphs() {
        let mut board = corridor(3);
        board
            .place_blocker(Position::new(0, 1), Direction::East, BlockerKind::Door(Color::Blue))
            .unwrap();
        board
            .place_collectible(Position::new(0, 1), ItemKind::Key(Color::Blue))
            .unwrap();
        let mut state = MazeState::new(board);
        state.board.reveal_from(Position::new(0, 1));
        state.board.reveal_from(Position::new(0, 2));

        let map = render(&state.snapshot());
        assert_eq!(map.lines().nth(1), Some("| @   b B E |"));
    }

    #[test]
    fn single_cell_shows_the_player_over_the_exit() {
        let state = MazeState::new(corridor(1));
        let map = render(&state.snapshot());
        assert_eq!(map.lines().nth(1), Some("| @ |"));
        assert_eq!(map.lines().count(), 3);
    }
}
