//! Randomized maze carving.
//!
//! Both generators start from an all-wall grid and carve a connected
//! passage tree under the *thinness rule*: a cell may be carved only
//! while it has at most one already-passable orthogonal neighbour and at
//! most one already-passable diagonal neighbour, which prevents wide
//! rooms and merged parallel corridors. A post-pass then walks the
//! visitation-order path record at a randomized stride and forces the
//! visited cells passable, reopening anything a dead-end revert closed.
//!
//! Entropy is drawn once at invocation start (start point and initial
//! shuffle seed); everything after that is a pure function of the grid
//! and the recorded seeds. The per-carve shuffle uses the small seeded
//! LCG from `warren-core`, with the seed bumped at a fixed cadence (+8
//! every 8 depth-first steps, +3 every 3 breadth-first pops) to break up
//! the generator's short period. The cadence is part of the observable
//! output for a given seed and must not be re-tuned.

use rand::Rng;
use rand::RngExt;
use smallvec::SmallVec;
use warren_core::shuffle::shuffle;
use warren_core::{Matrix, Point, WorkList};
use warren_space::Grid;

use crate::config::Algo;

// ── Generation context ─────────────────────────────────────────────

/// Mutable state threaded through one generation call: the step
/// counter driving the seed cadence, the current shuffle seed, and the
/// visitation-order path record consumed by the thinning pass.
struct GenContext {
    steps: u64,
    seed: u64,
    path: Vec<Point>,
}

impl GenContext {
    fn new(seed: u64) -> Self {
        Self {
            steps: 0,
            seed,
            path: Vec::new(),
        }
    }
}

/// Whether `candidate` may be carved: unvisited, with at most one
/// passable orthogonal and at most one passable diagonal neighbour.
fn can_carve(grid: &Grid, visited: &Matrix<bool>, candidate: Point) -> bool {
    !*visited.get(candidate)
        && grid.neighbors4_by_value(candidate, false).len() <= 1
        && grid.neighbors_diagonal4_by_value(candidate, false).len() <= 1
}

// ── Depth-first carve ──────────────────────────────────────────────

/// A pending depth-first frame: the shuffled neighbours of an entered
/// cell and a cursor over them. Holding frames on the heap bounds the
/// carve at `O(width * height)` memory instead of call-stack depth.
struct Frame {
    neighbors: SmallVec<[Point; 4]>,
    cursor: usize,
}

/// Enter `point`: count the step, carve it passable, record it on the
/// path, advance the seed cadence, and shuffle its neighbours for
/// descent.
fn enter(grid: &mut Grid, visited: &mut Matrix<bool>, ctx: &mut GenContext, point: Point) -> Frame {
    ctx.steps += 1;
    visited.set(point, true);
    grid.set_wall(point, false);
    ctx.path.push(point);
    if ctx.steps % 8 == 0 {
        ctx.seed += 8;
    }
    let mut neighbors = grid.neighbors4(point);
    shuffle(&mut neighbors, ctx.seed);
    Frame {
        neighbors,
        cursor: 0,
    }
}

fn carve_dfs(grid: &mut Grid, visited: &mut Matrix<bool>, ctx: &mut GenContext, start: Point) {
    let mut stack = vec![enter(grid, visited, ctx, start)];
    while let Some(frame) = stack.last_mut() {
        if frame.cursor >= frame.neighbors.len() {
            stack.pop();
            continue;
        }
        let candidate = frame.neighbors[frame.cursor];
        frame.cursor += 1;
        // Conditions are evaluated now, not at frame creation: earlier
        // descents may have carved around the candidate since.
        if can_carve(grid, visited, candidate) {
            let next = enter(grid, visited, ctx, candidate);
            stack.push(next);
        }
    }
}

// ── Breadth-first carve ────────────────────────────────────────────

fn carve_bfs(grid: &mut Grid, visited: &mut Matrix<bool>, ctx: &mut GenContext, start: Point) {
    let mut list = WorkList::new();
    list.push(start);
    visited.set(start, true);
    grid.set_wall(start, false);

    while !list.is_empty() {
        ctx.steps += 1;
        // Alternate which end of the work-list is drained. The mix of
        // queue and stack behaviour is what gives this carve its hybrid
        // character; a pure FIFO here produces a different maze family.
        let popped = if ctx.steps % 2 == 0 {
            list.pop_front()
        } else {
            list.pop_back()
        };
        let Some(point) = popped else { break };
        ctx.path.push(point);

        if ctx.steps % 3 == 0 {
            ctx.seed += 3;
        }

        let mut neighbors = grid.neighbors4(point);
        shuffle(&mut neighbors, ctx.seed);
        for &candidate in &neighbors {
            if can_carve(grid, visited, candidate) {
                visited.set(candidate, true);
                grid.set_wall(candidate, false);
                list.push(candidate);
            }
        }

        // A point with no in-bounds neighbours at all reverts to wall;
        // the thinning pass may reopen it.
        if neighbors.is_empty() {
            grid.set_wall(point, true);
        }
    }
}

// ── Stride thinning ────────────────────────────────────────────────

/// Walk the visitation-order path at a randomized stride, forcing each
/// visited cell passable. `divisor` controls the density: the stride
/// averages 1.5x `cell_count / divisor`, so smaller divisors reopen
/// more cells. The stride is clamped to at least 1 so the walk advances
/// on grids smaller than the divisor.
fn thin<R: Rng + ?Sized>(grid: &mut Grid, path: &[Point], divisor: f64, rng: &mut R) {
    let range = grid.cell_count() as f64 / divisor;
    let mut i = 0;
    while i < path.len() {
        grid.set_wall(path[i], false);
        let stride = (range + rng.random::<f64>() * range).round() as usize;
        i += stride.max(1);
    }
}

// ── Entry points ───────────────────────────────────────────────────

/// Carve a fresh `width x height` maze with `algo`, drawing entropy
/// from `rng`.
///
/// The start point and initial shuffle seed come from `rng`, so a
/// seeded generator reproduces the same maze exactly. A zero-cell
/// target returns the empty grid untouched.
pub fn generate_with<R: Rng + ?Sized>(algo: Algo, width: u32, height: u32, rng: &mut R) -> Grid {
    let mut grid = Grid::walls(width, height);
    if grid.cell_count() == 0 {
        return grid;
    }
    let mut visited = Matrix::new(width, height, false);
    let start = grid.random_point_with(rng);
    let seed = (rng.random::<f64>() * 10.0) as u64;
    let mut ctx = GenContext::new(seed);

    match algo {
        Algo::Dfs => {
            carve_dfs(&mut grid, &mut visited, &mut ctx, start);
            thin(&mut grid, &ctx.path, 90.0, rng);
        }
        Algo::Bfs => {
            carve_bfs(&mut grid, &mut visited, &mut ctx, start);
            thin(&mut grid, &ctx.path, 50.0, rng);
        }
    }
    grid
}

/// Carve a fresh `width x height` maze with `algo` from thread-local
/// entropy. Successive calls produce different mazes.
pub fn generate(algo: Algo, width: u32, height: u32) -> Grid {
    generate_with(algo, width, height, &mut rand::rng())
}
