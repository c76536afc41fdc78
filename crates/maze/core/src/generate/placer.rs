//! Gate placement along the shortest route, with solvability verification.
//!
//! Each attempt gates a few passages of the start-to-exit shortest path and
//! drops the matching collectible strictly closer to the start than its gate.
//! The result is accepted only if [`solver::is_solvable`] agrees; otherwise the
//! attempt is discarded and a new one drawn. Once the attempt budget is spent
//! the board is left item-free, which is always solvable.
use rand::Rng;
use rand::seq::SliceRandom;

use crate::board::{BlockerKind, Board, Color};
use crate::config::{MazeConfig, blocker_count_for};
use crate::generate::paths::{self, DistanceMap};
use crate::generate::solver;
use crate::grid::{Direction, Position};

/// Summary of a placement run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementReport {
    /// Attempts consumed, including the successful one.
    pub attempts: u32,
    /// Gates committed. Zero means the maze was left item-free.
    pub gates: usize,
}

impl PlacementReport {
    pub fn is_item_free(&self) -> bool {
        self.gates == 0
    }
}

/// Why a single attempt was thrown away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AttemptFailure {
    NoCandidates,
    NoItemCell { gate: Position },
    Unsolvable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemPlacer {
    blocker_count: usize,
    attempts: u32,
}

impl ItemPlacer {
    pub const fn new(blocker_count: usize, attempts: u32) -> Self {
        Self {
            blocker_count,
            attempts,
        }
    }

    /// Placer scaled to the board: `clamp(cells / 30, 2, 4)` gates.
    pub fn for_board(board: &Board, attempts: u32) -> Self {
        Self::new(blocker_count_for(board.grid().cell_count()), attempts)
    }

    pub fn from_config(config: &MazeConfig) -> Self {
        Self::new(config.blocker_count(), config.placement_attempts)
    }

    pub fn blocker_count(&self) -> usize {
        self.blocker_count
    }

    /// Gates the board, retrying until a solvable layout is found or the budget
    /// runs out. Expects a carved board whose walls will not change afterwards.
    pub fn place<R: Rng + ?Sized>(&self, board: &mut Board, rng: &mut R) -> PlacementReport {
        for attempt in 1..=self.attempts {
            board.clear_items();
            match self.try_place(board, rng) {
                Ok(gates) => {
                    tracing::info!(attempt, gates, "item placement committed");
                    return PlacementReport {
                        attempts: attempt,
                        gates,
                    };
                }
                Err(AttemptFailure::NoCandidates) => {
                    // The shortest path of a carved maze is fixed, so later
                    // attempts would see the same empty candidate list.
                    tracing::debug!(attempt, "no gateable passages on the shortest path");
                    board.clear_items();
                    return PlacementReport {
                        attempts: attempt,
                        gates: 0,
                    };
                }
                Err(failure) => {
                    tracing::debug!(attempt, ?failure, "placement attempt discarded");
                }
            }
        }

        board.clear_items();
        tracing::warn!(
            attempts = self.attempts,
            "item placement exhausted its budget; leaving the maze item-free"
        );
        PlacementReport {
            attempts: self.attempts,
            gates: 0,
        }
    }

    fn try_place<R: Rng + ?Sized>(
        &self,
        board: &mut Board,
        rng: &mut R,
    ) -> Result<usize, AttemptFailure> {
        let grid = board.grid();
        let distances = paths::distances_from(grid, grid.start());
        let path = paths::shortest_path(grid, grid.start(), grid.exit())
            .ok_or(AttemptFailure::NoCandidates)?;
        let candidates = gate_candidates(paths::path_passages(grid, &path));
        if candidates.is_empty() || self.blocker_count == 0 {
            return Err(AttemptFailure::NoCandidates);
        }

        let count = self.blocker_count.min(candidates.len());
        let selected: Vec<(Position, Direction)> =
            candidates.choose_multiple(rng, count).copied().collect();
        let kinds = blocker_kinds(count, rng);

        for ((gate, direction), kind) in selected.into_iter().zip(kinds) {
            board
                .place_blocker(gate, direction, kind)
                .map_err(|_| AttemptFailure::Unsolvable)?;

            let cell = item_cell(board, &distances, gate, rng)
                .ok_or(AttemptFailure::NoItemCell { gate })?;
            board
                .place_collectible(cell, kind.cleared_by())
                .map_err(|_| AttemptFailure::NoItemCell { gate })?;
        }

        if solver::is_solvable(board) {
            Ok(count)
        } else {
            Err(AttemptFailure::Unsolvable)
        }
    }
}

/// Path passages eligible for a gate: all but the first and last, unless the
/// path is two passages or shorter.
fn gate_candidates(passages: Vec<(Position, Direction)>) -> Vec<(Position, Direction)> {
    if passages.len() <= 2 {
        return passages;
    }
    passages[1..passages.len() - 1].to_vec()
}

/// Blocker kinds for `count` gates. Two or more gates always include a rock
/// and a door; the rest are uniform.
fn blocker_kinds<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<BlockerKind> {
    let mut kinds = Vec::with_capacity(count);
    match count {
        0 => {}
        1 => kinds.push(random_kind(rng)),
        _ => {
            kinds.push(BlockerKind::Rock);
            let color = Color::ALL[rng.gen_range(0..Color::ALL.len())];
            kinds.push(BlockerKind::Door(color));
            while kinds.len() < count {
                kinds.push(random_kind(rng));
            }
            kinds.shuffle(rng);
        }
    }
    kinds
}

fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> BlockerKind {
    BlockerKind::ALL[rng.gen_range(0..BlockerKind::ALL.len())]
}

/// A free cell strictly closer to the start than `gate`, never the start or
/// exit and never one already holding a collectible.
fn item_cell<R: Rng + ?Sized>(
    board: &Board,
    distances: &DistanceMap,
    gate: Position,
    rng: &mut R,
) -> Option<Position> {
    let limit = distances.get(gate)?;
    let eligible: Vec<Position> = distances
        .iter()
        .filter(|(position, distance)| {
            *distance < limit
                && *position != board.start()
                && !board.is_exit(*position)
                && board.items().collectible_at(*position).is_none()
        })
        .map(|(position, _)| position)
        .collect();
    eligible.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn first_and_last_passages_are_skipped_on_long_paths() {
        let passages: Vec<_> = (0..5)
            .map(|col| (Position::new(0, col), Direction::East))
            .collect();
        let candidates = gate_candidates(passages.clone());
        assert_eq!(candidates, passages[1..4].to_vec());
    }

    #[test]
    fn short_paths_keep_every_passage() {
        let passages = vec![
            (Position::new(0, 0), Direction::East),
            (Position::new(0, 1), Direction::South),
        ];
        assert_eq!(gate_candidates(passages.clone()), passages);
    }

    #[test]
    fn two_or_more_gates_mix_rock_and_door() {
        let mut rng = StdRng::seed_from_u64(11);
        for count in 2..=4 {
            for _ in 0..20 {
                let kinds = blocker_kinds(count, &mut rng);
                assert_eq!(kinds.len(), count);
                assert!(kinds.contains(&BlockerKind::Rock));
                assert!(kinds.iter().any(|kind| kind.is_door()));
            }
        }
        assert_eq!(blocker_kinds(1, &mut rng).len(), 1);
        assert!(blocker_kinds(0, &mut rng).is_empty());
    }
}
