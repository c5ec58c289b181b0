//! Maze generation, markers, and pathfinding for the Warren toolkit.
//!
//! The central type is [`Maze`]: a boolean occupancy grid together with
//! its named markers, rendered path links, and colour overlays. Mazes
//! are carved by one of two randomized generators ([`Algo::Dfs`] and
//! [`Algo::Bfs`]) and queried with a two-phase breadth-first
//! [`find_path`](Maze::find_path).
//!
//! ```
//! use warren_engine::{Algo, Maze, MazeConfig};
//!
//! let mut maze = Maze::new(MazeConfig {
//!     width: 16,
//!     height: 16,
//!     algo: Some(Algo::Dfs),
//!     ..MazeConfig::default()
//! });
//!
//! // Carve a fresh layout in place, keeping the markers valid.
//! maze.randomize();
//! assert_eq!(maze.grid().width(), 16);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod generate;
pub mod marker;
pub mod maze;
pub mod path;

pub use config::{Algo, MarkerSpec, MazeConfig, ParseAlgoError};
pub use generate::{generate, generate_with};
pub use marker::Marker;
pub use maze::{Link, Maze};
pub use path::{find_path, find_path_where};
