//! Test fixtures and reference graph helpers for Warren development.
//!
//! Provides ASCII grid fixtures and deliberately naive reference
//! implementations of connectivity and shortest-path queries, so engine
//! tests can check the production algorithms against an independent
//! oracle.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::VecDeque;

use warren_core::{Matrix, Point};
use warren_space::Grid;

/// Build a [`Grid`] from ASCII art: `#` is a wall, anything else a
/// passage. Leading/trailing blank lines are ignored; rows are the
/// non-blank lines top to bottom.
///
/// ```
/// use warren_test_utils::grid_from_ascii;
///
/// let grid = grid_from_ascii(
///     "#.#
///      ...
///      #.#",
/// );
/// assert_eq!(grid.width(), 3);
/// assert!(grid.is_wall(warren_core::Point::new(0, 0)));
/// ```
pub fn grid_from_ascii(art: &str) -> Grid {
    let rows: Vec<Vec<bool>> = art
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().map(|c| c == '#').collect())
        .collect();
    Grid::from_matrix(Matrix::from_rows(rows))
}

/// Reference flood fill: all passable cells orthogonally reachable from
/// `start`, in discovery order. Empty when `start` is a wall or out of
/// bounds.
pub fn reachable_from(grid: &Grid, start: Point) -> Vec<Point> {
    if !grid.in_bounds(start) || grid.is_wall(start) {
        return Vec::new();
    }
    let mut seen = Matrix::new(grid.width(), grid.height(), false);
    let mut queue = VecDeque::new();
    let mut result = Vec::new();
    seen.set(start, true);
    queue.push_back(start);
    while let Some(p) = queue.pop_front() {
        result.push(p);
        for n in grid.neighbors4(p) {
            if !grid.is_wall(n) && !*seen.get(n) {
                seen.set(n, true);
                queue.push_back(n);
            }
        }
    }
    result
}

/// Whether `a` and `b` are connected through passable cells
/// (orthogonal moves).
pub fn is_connected(grid: &Grid, a: Point, b: Point) -> bool {
    reachable_from(grid, a).contains(&b)
}

/// Reference breadth-first distance in orthogonal steps between two
/// passable cells, or `None` when unreachable.
pub fn bfs_distance(grid: &Grid, start: Point, end: Point) -> Option<usize> {
    if !grid.in_bounds(start) || grid.is_wall(start) {
        return None;
    }
    let mut dist: Matrix<Option<usize>> = Matrix::new(grid.width(), grid.height(), None);
    let mut queue = VecDeque::new();
    dist.set(start, Some(0));
    queue.push_back(start);
    while let Some(p) = queue.pop_front() {
        let d = dist.get(p).unwrap_or(0);
        if p == end {
            return Some(d);
        }
        for n in grid.neighbors4(p) {
            if !grid.is_wall(n) && dist.get(n).is_none() {
                dist.set(n, Some(d + 1));
                queue.push_back(n);
            }
        }
    }
    None
}
