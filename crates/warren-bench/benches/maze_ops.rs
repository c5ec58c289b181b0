//! Criterion micro-benchmarks for maze generation and pathfinding.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use warren_bench::reference_maze;
use warren_core::Point;
use warren_engine::{find_path, generate_with, Algo};
use warren_space::Grid;

/// Benchmark: carve a 64x64 maze with the depth-first generator.
fn bench_generate_dfs_64(c: &mut Criterion) {
    c.bench_function("generate_dfs_64x64", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        b.iter(|| {
            let grid = generate_with(Algo::Dfs, 64, 64, &mut rng);
            black_box(&grid);
        });
    });
}

/// Benchmark: carve a 64x64 maze with the breadth-first generator.
fn bench_generate_bfs_64(c: &mut Criterion) {
    c.bench_function("generate_bfs_64x64", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        b.iter(|| {
            let grid = generate_with(Algo::Bfs, 64, 64, &mut rng);
            black_box(&grid);
        });
    });
}

/// First and last passable cells in row-major order. A carved maze is
/// one connected component, so the pair is always routable.
fn far_passable_pair(grid: &Grid) -> (Point, Point) {
    let mut open = grid
        .matrix()
        .iter()
        .filter(|(_, &wall)| !wall)
        .map(|(p, _)| p);
    let first = open.next().expect("carved maze has passable cells");
    let last = open.last().unwrap_or(first);
    (first, last)
}

/// Benchmark: route across a carved 64x64 maze, orthogonal moves only.
fn bench_find_path_64(c: &mut Criterion) {
    let grid = reference_maze(Algo::Dfs, 64, 7);
    let (start, end) = far_passable_pair(&grid);

    c.bench_function("find_path_64x64", |b| {
        b.iter(|| {
            let path = find_path(&grid, start, end, false);
            black_box(&path);
        });
    });
}

/// Benchmark: the same route with diagonal movement enabled.
fn bench_find_path_diagonal_64(c: &mut Criterion) {
    let grid = reference_maze(Algo::Dfs, 64, 7);
    let (start, end) = far_passable_pair(&grid);

    c.bench_function("find_path_diagonal_64x64", |b| {
        b.iter(|| {
            let path = find_path(&grid, start, end, true);
            black_box(&path);
        });
    });
}

criterion_group!(
    benches,
    bench_generate_dfs_64,
    bench_generate_bfs_64,
    bench_find_path_64,
    bench_find_path_diagonal_64
);
criterion_main!(benches);
