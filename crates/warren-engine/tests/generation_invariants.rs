//! Integration tests: carving invariants across seeds and sizes.
//!
//! Runs both generators over a spread of seeded RNGs and checks the
//! engine-level guarantees from outside the crate: dimensions survive
//! generation, the carved region forms a single connected component
//! with real spatial extent, and markers land back on passages after
//! every randomization.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use warren_core::Point;
use warren_engine::{generate_with, Algo, MarkerSpec, Maze, MazeConfig};
use warren_space::Grid;
use warren_test_utils::reachable_from;

// ── Helpers ──────────────────────────────────────────────────────────

fn passable_cells(grid: &Grid) -> Vec<Point> {
    grid.matrix()
        .iter()
        .filter(|(_, &wall)| !wall)
        .map(|(p, _)| p)
        .collect()
}

// ── Connectivity ─────────────────────────────────────────────────────

#[test]
fn carved_region_is_one_connected_component() {
    for algo in [Algo::Dfs, Algo::Bfs] {
        for seed in 0..8u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let grid = generate_with(algo, 20, 20, &mut rng);
            let open = passable_cells(&grid);
            assert!(!open.is_empty(), "{algo} seed {seed} carved nothing");

            let reached = reachable_from(&grid, open[0]);
            assert_eq!(
                reached.len(),
                open.len(),
                "{algo} seed {seed}: {} of {} passable cells reachable",
                reached.len(),
                open.len()
            );
        }
    }
}

#[test]
fn carve_spans_beyond_half_the_grid_extent() {
    // The maze must not be trivially tiny: from any carved cell, some
    // other carved cell lies further than half the shorter dimension.
    for algo in [Algo::Dfs, Algo::Bfs] {
        for seed in 0..8u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let grid = generate_with(algo, 20, 20, &mut rng);
            let open = passable_cells(&grid);
            let origin = open[0];
            let radius = reachable_from(&grid, origin)
                .iter()
                .map(|p| origin.manhattan(p))
                .max()
                .unwrap_or(0);
            assert!(
                radius > 10,
                "{algo} seed {seed}: carve radius {radius} from {origin}"
            );
        }
    }
}

#[test]
fn asymmetric_grids_keep_their_dimensions() {
    for algo in [Algo::Dfs, Algo::Bfs] {
        for (w, h) in [(9, 17), (17, 9), (3, 30), (30, 3)] {
            let mut rng = ChaCha8Rng::seed_from_u64(99);
            let grid = generate_with(algo, w, h, &mut rng);
            assert_eq!(grid.width(), w, "{algo} {w}x{h}");
            assert_eq!(grid.height(), h, "{algo} {w}x{h}");
            assert!(!passable_cells(&grid).is_empty(), "{algo} {w}x{h}");
        }
    }
}

// ── Markers across randomizations ────────────────────────────────────

#[test]
fn markers_return_to_passages_after_every_randomize() {
    let mut maze = Maze::new(MazeConfig {
        width: 15,
        height: 15,
        algo: Some(Algo::Dfs),
        markers: MarkerSpec::Count(4),
        ..MazeConfig::default()
    });

    for seed in 0..16u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        maze.randomize_with(&mut rng);
        for m in maze.markers() {
            let q = m.point();
            let stranded = maze.grid().neighbors4_by_value(q, false).is_empty()
                && maze
                    .grid()
                    .neighbors_diagonal4_by_value(q, false)
                    .is_empty();
            assert!(
                !maze.grid().is_wall(q) || stranded,
                "seed {seed}: marker {} left on a wall at {} with open neighbours",
                m.id,
                q
            );
        }
    }
}

#[test]
fn randomize_moves_markers_but_keeps_identity() {
    let mut maze = Maze::new(MazeConfig {
        width: 12,
        height: 12,
        algo: Some(Algo::Bfs),
        markers: MarkerSpec::ids_from_list("entry,exit,cache"),
        ..MazeConfig::default()
    });
    let before: Vec<(String, String)> = maze
        .markers()
        .iter()
        .map(|m| (m.id.clone(), m.color.clone()))
        .collect();

    maze.randomize_with(&mut ChaCha8Rng::seed_from_u64(5));

    let after: Vec<(String, String)> = maze
        .markers()
        .iter()
        .map(|m| (m.id.clone(), m.color.clone()))
        .collect();
    assert_eq!(before, after, "randomize must only touch positions");
    assert!(maze.find_marker("exit").is_some());
}
