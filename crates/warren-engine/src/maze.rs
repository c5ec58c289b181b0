//! The maze aggregate: grid, markers, links, and overlays.

use indexmap::IndexMap;
use rand::Rng;
use rand::RngExt;
use warren_core::{Matrix, Point};
use warren_space::Grid;

use crate::config::{Algo, MarkerSpec, MazeConfig};
use crate::generate::generate_with;
use crate::marker::{self, Marker};
use crate::path;

// ── Link ───────────────────────────────────────────────────────────

/// A rendering-only segment between two points.
///
/// Produced in bulk by [`Maze::add_path`] from a found path; carries no
/// invariant beyond referencing coordinates the caller considers valid,
/// and the endpoints need not be adjacent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    /// Segment start.
    pub start: Point,
    /// Segment end.
    pub end: Point,
    /// Colour name or hex value used by renderers.
    pub color: String,
}

// ── Maze ───────────────────────────────────────────────────────────

/// A wall/passage grid with named markers, rendered path links, and
/// colour overlays.
///
/// The maze exclusively owns all four collections; `clone` therefore
/// yields a fully independent deep copy.
///
/// # Examples
///
/// ```
/// use warren_engine::{Algo, MarkerSpec, Maze, MazeConfig};
///
/// let mut maze = Maze::new(MazeConfig {
///     width: 10,
///     height: 10,
///     algo: Some(Algo::Dfs),
///     markers: MarkerSpec::ids_from_list("start,goal"),
///     ..MazeConfig::default()
/// });
///
/// let start = maze.find_marker("start").unwrap().point();
/// let goal = maze.find_marker("goal").unwrap().point();
/// if let Some(path) = maze.find_path(start, goal, false) {
///     maze.add_path(&path, "gray");
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Maze {
    grid: Grid,
    markers: Vec<Marker>,
    links: Vec<Link>,
    overlays: IndexMap<String, Matrix<String>>,
    algo: Option<Algo>,
}

impl Maze {
    /// Construct a maze from a [`MazeConfig`].
    ///
    /// With an algorithm set, the grid is carved immediately and the
    /// algorithm remembered for [`randomize`](Maze::randomize);
    /// otherwise the grid is filled with the configured value.
    /// Synthesized markers are position-fixed before returning;
    /// explicitly supplied markers are taken as-is.
    pub fn new(config: MazeConfig) -> Self {
        let MazeConfig {
            width,
            height,
            algo,
            markers,
            value,
        } = config;

        let grid = match algo {
            Some(a) => generate_with(a, width, height, &mut rand::rng()),
            None => Grid::new(width, height, value),
        };

        let mut maze = Self {
            grid,
            markers: Vec::new(),
            links: Vec::new(),
            overlays: IndexMap::new(),
            algo,
        };

        match markers {
            MarkerSpec::None => {}
            MarkerSpec::Count(n) => {
                let ids: Vec<String> = (0..n).map(|i| i.to_string()).collect();
                maze.markers = marker::place_around(&ids, width, height);
                maze.fix_markers_position();
            }
            MarkerSpec::Ids(ids) => {
                maze.markers = marker::place_around(&ids, width, height);
                maze.fix_markers_position();
            }
            MarkerSpec::Markers(list) => maze.markers = list,
        }

        maze
    }

    /// Wrap an existing wall matrix, with no markers, links, or
    /// overlays.
    pub fn from_matrix(matrix: Matrix<bool>) -> Self {
        Self {
            grid: Grid::from_matrix(matrix),
            markers: Vec::new(),
            links: Vec::new(),
            overlays: IndexMap::new(),
            algo: None,
        }
    }

    /// Assemble a maze from previously exported parts.
    pub fn from_parts(
        matrix: Matrix<bool>,
        markers: Vec<Marker>,
        links: Vec<Link>,
        overlays: IndexMap<String, Matrix<String>>,
    ) -> Self {
        Self {
            grid: Grid::from_matrix(matrix),
            markers,
            links,
            overlays,
            algo: None,
        }
    }

    // ── Accessors ──────────────────────────────────────────────

    /// The wall/passage grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the grid. Markers are not re-validated on
    /// mutation; call [`fix_markers_position`](Maze::fix_markers_position)
    /// after carving by hand.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The markers, in creation order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Mutable access to the markers.
    pub fn markers_mut(&mut self) -> &mut Vec<Marker> {
        &mut self.markers
    }

    /// The rendered path links, in insertion order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// The named overlays, in insertion order.
    pub fn overlays(&self) -> &IndexMap<String, Matrix<String>> {
        &self.overlays
    }

    /// The algorithm this maze was configured with, if any.
    pub fn algo(&self) -> Option<Algo> {
        self.algo
    }

    // ── Generation ─────────────────────────────────────────────

    /// Re-carve the grid with the configured algorithm (DFS when none
    /// was configured) and move any stranded markers back onto
    /// passages. Dimensions are preserved.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// [`randomize`](Maze::randomize) drawing entropy from `rng`, for
    /// reproducible layouts.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let algo = self.algo.unwrap_or_default();
        self.grid = generate_with(algo, self.grid.width(), self.grid.height(), rng);
        self.fix_markers_position();
    }

    /// Remove all walls.
    pub fn clear(&mut self) {
        self.grid.fill(false);
    }

    /// Swap walls and passages.
    pub fn invert(&mut self) {
        self.grid.invert();
    }

    // ── Markers ────────────────────────────────────────────────

    /// Find a marker by id. The query is trimmed; stored ids are
    /// compared verbatim.
    pub fn find_marker(&self, id: &str) -> Option<&Marker> {
        let id = id.trim();
        self.markers.iter().find(|m| m.id == id)
    }

    /// Move every wall-sitting marker to its nearest passable
    /// neighbour (orthogonal preferred, then diagonal; stranded
    /// markers stay put). Runs automatically after generation.
    pub fn fix_markers_position(&mut self) {
        marker::fix_positions(&self.grid, &mut self.markers);
    }

    // ── Pathfinding ────────────────────────────────────────────

    /// Find a path from `start` to `end` over passable cells. See
    /// [`find_path`](crate::path::find_path).
    pub fn find_path(&self, start: Point, end: Point, diagonal: bool) -> Option<Vec<Point>> {
        path::find_path(&self.grid, start, end, diagonal)
    }

    /// Find a path from `start` to the first cell satisfying
    /// `stop(cell_is_wall, x, y)`. See
    /// [`find_path_where`](crate::path::find_path_where).
    pub fn find_path_where<F>(&self, start: Point, stop: F, diagonal: bool) -> Option<Vec<Point>>
    where
        F: FnMut(bool, i32, i32) -> bool,
    {
        path::find_path_where(&self.grid, start, stop, diagonal)
    }

    // ── Links and overlays ─────────────────────────────────────

    /// Append one [`Link`] per consecutive point pair. Purely additive;
    /// pairs are not validated for adjacency.
    pub fn add_path(&mut self, points: &[Point], color: &str) {
        for pair in points.windows(2) {
            self.links.push(Link {
                start: pair[0],
                end: pair[1],
                color: color.to_string(),
            });
        }
    }

    /// Register a grid-sized overlay matrix filled with `fill` under
    /// `id`, replacing any previous overlay of that name.
    pub fn add_overlay(&mut self, id: impl Into<String>, fill: impl Into<String>) {
        let matrix = Matrix::new(self.grid.width(), self.grid.height(), fill.into());
        self.overlays.insert(id.into(), matrix);
    }

    /// A grid-sized matrix filled with `value`, for callers building
    /// their own overlays or scratch layers.
    pub fn make_points_matrix<T: Clone>(&self, value: T) -> Matrix<T> {
        Matrix::new(self.grid.width(), self.grid.height(), value)
    }

    // ── Random extraction ──────────────────────────────────────

    /// A uniformly random in-bounds point ( `(0, 0)` on a degenerate
    /// grid).
    pub fn random_point(&self) -> Point {
        self.grid.random_point()
    }

    /// [`random_point`](Maze::random_point) drawing from `rng`.
    pub fn random_point_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        self.grid.random_point_with(rng)
    }

    /// A random point paired with one of its orthogonal neighbours,
    /// chosen uniformly. `None` when the point has no in-bounds
    /// neighbour (degenerate or single-cell grid).
    pub fn random_edge(&self) -> Option<(Point, Point)> {
        self.random_edge_with(&mut rand::rng())
    }

    /// [`random_edge`](Maze::random_edge) drawing from `rng`.
    pub fn random_edge_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(Point, Point)> {
        let point = self.grid.random_point_with(rng);
        let neighbors = self.grid.neighbors4(point);
        if neighbors.is_empty() {
            return None;
        }
        let index = (rng.random::<f64>() * neighbors.len() as f64) as usize;
        Some((point, neighbors[index]))
    }

    /// Extrapolate past `end` along the `start -> end` direction by
    /// `length` steps per axis, clamped into bounds.
    pub fn far_point(&self, start: Point, end: Point, length: i32) -> Point {
        let max_x = (self.grid.width() as i32 - 1).max(0);
        let max_y = (self.grid.height() as i32 - 1).max(0);
        Point::new(
            (start.x + (end.x - start.x) * length).clamp(0, max_x),
            (start.y + (end.y - start.y) * length).clamp(0, max_y),
        )
    }
}
