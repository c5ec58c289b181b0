//! Boolean occupancy grid with 4-connected and diagonal neighbourhoods.

use rand::Rng;
use rand::RngExt;
use smallvec::SmallVec;
use warren_core::{Matrix, Point};

/// A rectangular wall/passage grid.
///
/// Each cell holds a boolean: `true` is a wall (impassable), `false` a
/// passage. `width` is the number of rows (the first coordinate of a
/// [`Point`]) and `height` the length of each row.
///
/// Neighbour queries return coordinates in a fixed order because the
/// carving generators shuffle them with a seeded permutation — changing
/// the base order changes every generated maze for a given seed.
///
/// # Examples
///
/// ```
/// use warren_core::Point;
/// use warren_space::Grid;
///
/// let grid = Grid::new(5, 5, false);
/// assert_eq!(grid.width(), 5);
/// assert_eq!(grid.height(), 5);
///
/// // Corner cells have 2 orthogonal neighbours, interior cells 4.
/// assert_eq!(grid.neighbors4(Point::new(0, 0)).len(), 2);
/// assert_eq!(grid.neighbors4(Point::new(2, 2)).len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Matrix<bool>,
}

impl Grid {
    /// Create a `width x height` grid with every cell set to `value`.
    pub fn new(width: u32, height: u32, value: bool) -> Self {
        Self {
            cells: Matrix::new(width, height, value),
        }
    }

    /// Create an all-wall grid, the blank slate the generators carve into.
    pub fn walls(width: u32, height: u32) -> Self {
        Self::new(width, height, true)
    }

    /// Wrap an existing boolean matrix.
    pub fn from_matrix(cells: Matrix<bool>) -> Self {
        Self { cells }
    }

    /// The underlying boolean matrix.
    pub fn matrix(&self) -> &Matrix<bool> {
        &self.cells
    }

    /// Number of rows.
    pub fn width(&self) -> u32 {
        self.cells.rows()
    }

    /// Length of each row.
    pub fn height(&self) -> u32 {
        self.cells.cols()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.cell_count()
    }

    /// Whether `p` lies on the grid.
    pub fn in_bounds(&self, p: Point) -> bool {
        self.cells.in_bounds(p)
    }

    /// Whether the cell at `p` is a wall.
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of bounds.
    pub fn is_wall(&self, p: Point) -> bool {
        *self.cells.get(p)
    }

    /// Set the cell at `p` to wall (`true`) or passage (`false`).
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of bounds.
    pub fn set_wall(&mut self, p: Point, wall: bool) {
        self.cells.set(p, wall);
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: bool) {
        self.cells.fill(value);
    }

    /// Swap walls and passages in place.
    pub fn invert(&mut self) {
        self.cells.invert();
    }

    /// In-bounds orthogonal neighbours of `p`.
    ///
    /// Order: `(x+1, y)`, `(x-1, y)`, `(x, y+1)`, `(x, y-1)`.
    pub fn neighbors4(&self, p: Point) -> SmallVec<[Point; 4]> {
        let offsets: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        let mut result = SmallVec::new();
        for (dx, dy) in offsets {
            let n = Point::new(p.x + dx, p.y + dy);
            if self.in_bounds(n) {
                result.push(n);
            }
        }
        result
    }

    /// In-bounds diagonal neighbours of `p`.
    ///
    /// Order: `(x+1, y+1)`, `(x-1, y-1)`, `(x-1, y+1)`, `(x+1, y-1)`.
    pub fn neighbors_diagonal4(&self, p: Point) -> SmallVec<[Point; 4]> {
        let offsets: [(i32, i32); 4] = [(1, 1), (-1, -1), (-1, 1), (1, -1)];
        let mut result = SmallVec::new();
        for (dx, dy) in offsets {
            let n = Point::new(p.x + dx, p.y + dy);
            if self.in_bounds(n) {
                result.push(n);
            }
        }
        result
    }

    /// Orthogonal neighbours of `p` whose cell value equals `wall`.
    pub fn neighbors4_by_value(&self, p: Point, wall: bool) -> SmallVec<[Point; 4]> {
        let mut result = self.neighbors4(p);
        result.retain(|n| self.is_wall(*n) == wall);
        result
    }

    /// Diagonal neighbours of `p` whose cell value equals `wall`.
    pub fn neighbors_diagonal4_by_value(&self, p: Point, wall: bool) -> SmallVec<[Point; 4]> {
        let mut result = self.neighbors_diagonal4(p);
        result.retain(|n| self.is_wall(*n) == wall);
        result
    }

    /// A uniformly random in-bounds point drawn from `rng`.
    ///
    /// A grid with zero rows degrades to `(0, 0)` rather than failing;
    /// callers probing a possibly-empty grid must not rely on the
    /// fallback being a valid cell.
    pub fn random_point_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        if self.width() == 0 {
            return Point::new(0, 0);
        }
        let x = (rng.random::<f64>() * self.width() as f64) as i32;
        let y = (rng.random::<f64>() * self.height() as f64) as i32;
        Point::new(x, y)
    }

    /// A uniformly random in-bounds point from thread-local entropy.
    pub fn random_point(&self) -> Point {
        self.random_point_with(&mut rand::rng())
    }
}
