use maze_core::generate::paths::distances_from;
use maze_core::generate::solver;
use maze_core::{
    Board, Direction, Grid, ItemPlacer, MazeCarver, MazeConfig, Position, RecursiveBacktracker,
    build_board, is_solvable,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn assert_perfect_maze(grid: &Grid) {
    assert_eq!(grid.open_passage_count(), grid.cell_count() - 1);
    let distances = distances_from(grid, grid.start());
    assert_eq!(distances.reachable_count(), grid.cell_count());

    // walls agree on both sides of every passage
    for position in grid.positions() {
        for direction in Direction::ALL {
            if let Some(next) = grid.neighbor(position, direction) {
                assert_eq!(
                    grid.has_wall(position, direction),
                    grid.has_wall(next, direction.opposite())
                );
            } else {
                assert!(grid.has_wall(position, direction));
            }
        }
    }
}

/// Checks every committed gate against the placement rules.
fn assert_gates_are_fair(board: &Board) {
    let grid = board.grid();
    let distances = distances_from(grid, grid.start());
    let items = board.items();

    assert_eq!(items.blocker_count() % 2, 0);
    assert_eq!(items.collectible_count(), items.blocker_count() / 2);

    for (position, direction, kind) in items.blockers() {
        assert!(!grid.has_wall(position, direction));
        let next = grid.neighbor(position, direction).unwrap();
        assert_eq!(items.blocker_at(next, direction.opposite()), Some(kind));

        let gate_distance = distances
            .get(position)
            .unwrap()
            .min(distances.get(next).unwrap());
        let has_key_before = items.collectibles().any(|(cell, item)| {
            item == kind.cleared_by() && distances.get(cell).unwrap() < gate_distance
        });
        assert!(has_key_before, "no {} before the {kind} at {position}", kind.cleared_by());
    }

    for (cell, _) in items.collectibles() {
        assert_ne!(cell, board.start());
        assert_ne!(cell, board.exit());
    }
}

#[test]
fn carved_mazes_are_perfect_for_many_sizes() {
    for rows in 1..=6 {
        for cols in 1..=6 {
            let mut grid = Grid::new(rows, cols).unwrap();
            RecursiveBacktracker.carve(&mut grid, &mut StdRng::seed_from_u64((rows * 31 + cols) as u64));
            assert_perfect_maze(&grid);
        }
    }
}

#[test]
fn carver_layouts_differ_across_rounds() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut layouts = Vec::new();
    for _ in 0..5 {
        let mut grid = Grid::new(8, 8).unwrap();
        RecursiveBacktracker.carve(&mut grid, &mut rng);
        layouts.push(grid);
    }
    layouts.dedup();
    assert!(layouts.len() >= 2);
}

#[test]
fn built_boards_are_always_solvable() {
    for seed in 0..40 {
        let mut rng = StdRng::seed_from_u64(seed);
        let config = MazeConfig::new(6 + (seed as usize % 7), 5 + (seed as usize % 5));
        let (board, report) = build_board(&config, &RecursiveBacktracker, &mut rng).unwrap();

        assert_perfect_maze(board.grid());
        assert!(is_solvable(&board));
        assert!(report.attempts >= 1 && report.attempts <= config.placement_attempts);
        assert_eq!(board.items().blocker_count(), report.gates * 2);
        assert_gates_are_fair(&board);
        assert!(board.visibility().is_revealed(Position::ORIGIN));
    }
}

#[test]
fn gate_count_scales_with_maze_area() {
    let mut gated = 0;
    for seed in 0..15 {
        let mut rng = StdRng::seed_from_u64(seed);
        let config = MazeConfig::new(10, 10);
        let (board, report) = build_board(&config, &RecursiveBacktracker, &mut rng).unwrap();
        if report.is_item_free() {
            assert!(board.items().is_empty());
            continue;
        }
        gated += 1;
        let entries = board.items().blocker_count();
        assert!((2 * 2..=4 * 2).contains(&entries), "{entries} blocker entries");
        assert!(report.gates <= config.blocker_count());
    }
    assert!(gated > 0, "no 10x10 maze received gates in 15 rounds");
}

#[test]
fn tiny_mazes_fall_back_to_item_free() {
    for (rows, cols) in [(1, 1), (1, 2), (2, 2)] {
        let mut rng = StdRng::seed_from_u64(5);
        let (board, report) =
            build_board(&MazeConfig::new(rows, cols), &RecursiveBacktracker, &mut rng).unwrap();
        assert!(report.is_item_free());
        assert!(board.items().is_empty());
        assert!(is_solvable(&board));
    }
}

#[test]
fn single_cell_maze_keeps_every_wall() {
    let mut rng = StdRng::seed_from_u64(1);
    let (board, _) = build_board(&MazeConfig::new(1, 1), &RecursiveBacktracker, &mut rng).unwrap();
    for direction in Direction::ALL {
        assert!(board.grid().has_wall(Position::ORIGIN, direction));
    }
    assert!(board.is_exit(Position::ORIGIN));
}

#[test]
fn placement_never_uses_start_or_exit_even_when_retrying() {
    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = Grid::new(7, 7).unwrap();
        RecursiveBacktracker.carve(&mut grid, &mut rng);
        let mut board = Board::new(grid);
        // a generous budget makes many discarded attempts likely
        let placer = ItemPlacer::for_board(&board, 60);
        placer.place(&mut board, &mut rng);
        assert_eq!(board.items().collectible_at(board.start()), None);
        assert_eq!(board.items().collectible_at(board.exit()), None);
        assert!(is_solvable(&board));
    }
}

#[test]
fn repeat_placement_replaces_previous_items() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut grid = Grid::new(9, 9).unwrap();
    RecursiveBacktracker.carve(&mut grid, &mut rng);
    let mut board = Board::new(grid);
    let placer = ItemPlacer::new(3, 20);
    let first = placer.place(&mut board, &mut rng);
    let second = placer.place(&mut board, &mut rng);
    assert_eq!(board.items().blocker_count(), second.gates * 2);
    assert!(first.gates <= 3 && second.gates <= 3);
}

#[test]
fn solver_state_space_is_bounded() {
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let config = MazeConfig::new(12, 12);
        let (board, _) = build_board(&config, &RecursiveBacktracker, &mut rng).unwrap();
        let report = solver::solve(&board);
        assert!(report.solvable);
        assert!(report.explored <= config.cell_count() * (maze_core::ItemKind::ALL.len() + 1));
    }
}

#[test]
fn invalid_config_is_rejected_before_building() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(build_board(&MazeConfig::new(0, 5), &RecursiveBacktracker, &mut rng).is_err());
    assert!(
        build_board(
            &MazeConfig::new(5, 5).with_placement_attempts(0),
            &RecursiveBacktracker,
            &mut rng
        )
        .is_err()
    );
}
