//! Warren: grid maze generation, markers, and pathfinding.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Warren sub-crates. For most users, adding `warren` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use warren::prelude::*;
//!
//! // Carve a 20x20 maze with two markers placed on passages.
//! let mut maze = Maze::new(MazeConfig {
//!     width: 20,
//!     height: 20,
//!     algo: Some(Algo::Dfs),
//!     markers: MarkerSpec::ids_from_list("start,goal"),
//!     ..MazeConfig::default()
//! });
//!
//! // Route between the markers and keep the result for rendering.
//! let start = maze.find_marker("start").unwrap().point();
//! let goal = maze.find_marker("goal").unwrap().point();
//! if let Some(path) = maze.find_path(start, goal, false) {
//!     maze.add_path(&path, "gray");
//!     assert_eq!(path.first(), Some(&start));
//!     assert_eq!(path.last(), Some(&goal));
//! }
//!
//! // A fresh layout any time; markers stay valid.
//! maze.randomize();
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `warren-core` | `Point`, `Matrix`, `WorkList`, seeded shuffle, colour tables |
//! | [`space`] | `warren-space` | The `Grid` occupancy matrix and neighbour resolvers |
//! | [`engine`] | `warren-engine` | Generators, pathfinder, markers, links, overlays, `Maze` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and helpers (`warren-core`).
///
/// Contains [`types::Point`], the rectangular [`types::Matrix`], the
/// double-ended [`types::WorkList`], the seeded
/// [`shuffle`](types::shuffle::shuffle), and the colour-name tables.
pub use warren_core as types;

/// Occupancy grid and neighbourhood queries (`warren-space`).
///
/// Provides [`space::Grid`]: the boolean wall/passage matrix with the
/// orthogonal and diagonal neighbour resolvers.
pub use warren_space as space;

/// Maze generation, markers, and pathfinding (`warren-engine`).
///
/// [`engine::Maze`] is the aggregate most callers work with;
/// [`engine::generate`] and [`engine::find_path`] are the standalone
/// algorithm entry points.
pub use warren_engine as engine;

/// Common imports for typical Warren usage.
///
/// ```rust
/// use warren::prelude::*;
/// ```
pub mod prelude {
    pub use warren_core::{Matrix, Point, WorkList};
    pub use warren_engine::{
        find_path, find_path_where, generate, Algo, Link, Marker, MarkerSpec, Maze, MazeConfig,
    };
    pub use warren_space::Grid;
}
