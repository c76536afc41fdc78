//! Solvability check over the augmented state space `(position, held item)`.
//!
//! The board is never mutated. Each search branch carries its own record of
//! pickups taken and blockers cleared, while the visited set is keyed only by
//! `(position, held)`, which bounds the search by `cells * (item kinds + 1)`.
use std::collections::{HashSet, VecDeque};

use crate::board::{Board, ItemKind};
use crate::grid::{Direction, Position};

/// Result of a solvability search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolveReport {
    pub solvable: bool,
    /// Distinct `(position, held)` states expanded.
    pub explored: usize,
}

#[derive(Clone, Debug)]
struct Branch {
    position: Position,
    held: Option<ItemKind>,
    picked_up: Vec<Position>,
    cleared: Vec<(Position, Direction)>,
}

impl Branch {
    fn has_cleared(&self, position: Position, direction: Direction) -> bool {
        self.cleared.contains(&(position, direction))
    }
}

/// Whether the exit can be reached from the start, respecting every gate.
pub fn is_solvable(board: &Board) -> bool {
    solve(board).solvable
}

pub fn solve(board: &Board) -> SolveReport {
    let grid = board.grid();
    let start = Branch {
        position: grid.start(),
        held: None,
        picked_up: Vec::new(),
        cleared: Vec::new(),
    };

    let mut visited: HashSet<(Position, Option<ItemKind>)> = HashSet::new();
    visited.insert((start.position, start.held));
    let mut queue = VecDeque::from([start]);

    while let Some(branch) = queue.pop_front() {
        if grid.is_exit(branch.position) {
            return SolveReport {
                solvable: true,
                explored: visited.len(),
            };
        }

        let mut successors = Vec::with_capacity(5);

        if branch.held.is_none() && !branch.picked_up.contains(&branch.position) {
            if let Some(item) = board.items().collectible_at(branch.position) {
                let mut next = branch.clone();
                next.held = Some(item);
                next.picked_up.push(branch.position);
                successors.push(next);
            }
        }

        for direction in grid.open_directions(branch.position) {
            let Some(target) = grid.neighbor(branch.position, direction) else {
                continue;
            };
            let gate = board
                .items()
                .blocker_at(branch.position, direction)
                .filter(|_| !branch.has_cleared(branch.position, direction));

            let mut next = branch.clone();
            next.position = target;
            match (gate, branch.held) {
                (None, _) => {}
                (Some(blocker), Some(item)) if item.clears(blocker) => {
                    next.held = None;
                    next.cleared.push((branch.position, direction));
                    next.cleared.push((target, direction.opposite()));
                }
                (Some(_), _) => continue,
            }
            successors.push(next);
        }

        for next in successors {
            if visited.insert((next.position, next.held)) {
                queue.push_back(next);
            }
        }
    }

    SolveReport {
        solvable: false,
        explored: visited.len(),
    }
}
