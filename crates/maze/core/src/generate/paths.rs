//! Wall-only breadth-first queries over the grid.
//!
//! Blockers are ignored here: these measure raw topology, which is what the
//! item placer needs before any blocker exists.
use std::collections::VecDeque;

use crate::grid::{Direction, Grid, Position};

/// BFS distance from a source cell to every cell of a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMap {
    cols: usize,
    distances: Vec<Option<usize>>,
}

impl DistanceMap {
    /// Steps from the source, or `None` if the cell is unreachable or outside the grid.
    pub fn get(&self, position: Position) -> Option<usize> {
        if position.col >= self.cols {
            return None;
        }
        self.distances
            .get(position.row * self.cols + position.col)
            .copied()
            .flatten()
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Reachable cells paired with their distance, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, usize)> + '_ {
        let cols = self.cols;
        self.distances
            .iter()
            .enumerate()
            .filter_map(move |(index, distance)| {
                distance.map(|d| (Position::new(index / cols, index % cols), d))
            })
    }
}

pub fn distances_from(grid: &Grid, source: Position) -> DistanceMap {
    let cols = grid.cols();
    let mut distances = vec![None; grid.cell_count()];
    if !grid.in_bounds(source) {
        return DistanceMap { cols, distances };
    }

    let mut queue = VecDeque::from([source]);
    distances[source.row * cols + source.col] = Some(0);

    while let Some(current) = queue.pop_front() {
        let Some(distance) = distances[current.row * cols + current.col] else {
            continue;
        };
        for direction in grid.open_directions(current) {
            let Some(next) = grid.neighbor(current, direction) else {
                continue;
            };
            let slot = &mut distances[next.row * cols + next.col];
            if slot.is_none() {
                *slot = Some(distance + 1);
                queue.push_back(next);
            }
        }
    }

    DistanceMap { cols, distances }
}

/// Cells of a shortest wall-respecting path, both endpoints included.
pub fn shortest_path(grid: &Grid, from: Position, to: Position) -> Option<Vec<Position>> {
    if !grid.in_bounds(from) || !grid.in_bounds(to) {
        return None;
    }

    let cols = grid.cols();
    let mut parents: Vec<Option<Position>> = vec![None; grid.cell_count()];
    let mut seen = vec![false; grid.cell_count()];
    let mut queue = VecDeque::from([from]);
    seen[from.row * cols + from.col] = true;

    while let Some(current) = queue.pop_front() {
        if current == to {
            let mut path = vec![current];
            let mut cursor = current;
            while let Some(parent) = parents[cursor.row * cols + cursor.col] {
                path.push(parent);
                cursor = parent;
            }
            path.reverse();
            return Some(path);
        }
        for direction in grid.open_directions(current) {
            let Some(next) = grid.neighbor(current, direction) else {
                continue;
            };
            let index = next.row * cols + next.col;
            if !seen[index] {
                seen[index] = true;
                parents[index] = Some(current);
                queue.push_back(next);
            }
        }
    }

    None
}

/// Turns consecutive path cells into directed passages `(from cell, direction)`.
pub fn path_passages(grid: &Grid, path: &[Position]) -> Vec<(Position, Direction)> {
    path.windows(2)
        .filter_map(|pair| {
            Direction::ALL
                .into_iter()
                .find(|direction| grid.neighbor(pair[0], *direction) == Some(pair[1]))
                .map(|direction| (pair[0], direction))
        })
        .collect()
}
