use arrayvec::ArrayVec;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::grid::{Direction, Grid, Position};

/// Turns a fully walled grid into a maze.
pub trait MazeCarver {
    fn carve<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R);
}

/// Randomized depth-first spanning-tree carving.
///
/// Uses an explicit stack, so grid size is bounded by memory rather than call
/// depth. The result is a perfect maze: `rows * cols - 1` open passages and
/// exactly one route between any two cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecursiveBacktracker;

impl MazeCarver for RecursiveBacktracker {
    fn carve<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) {
        let cols = grid.cols();
        let mut visited = vec![false; grid.cell_count()];
        let start = grid.start();

        visited[start.row * cols + start.col] = true;
        let mut stack = vec![start];

        while let Some(&current) = stack.last() {
            let unvisited: ArrayVec<(Direction, Position), 4> = Direction::ALL
                .into_iter()
                .filter_map(|direction| {
                    grid.neighbor(current, direction)
                        .map(|next| (direction, next))
                })
                .filter(|(_, next)| !visited[next.row * cols + next.col])
                .collect();

            match unvisited.choose(rng) {
                Some(&(direction, next)) => {
                    grid.remove_wall(current, direction);
                    visited[next.row * cols + next.col] = true;
                    stack.push(next);
                }
                None => {
                    stack.pop();
                }
            }
        }
    }
}
