//! Maze construction configuration.
//!
//! [`MazeConfig`] is the builder-input for [`Maze::new`](crate::Maze::new).
//! All fields are plain data with documented defaults; a default config
//! describes an empty zero-by-zero maze with no markers.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::marker::Marker;

// ── Algo ───────────────────────────────────────────────────────────

/// Carving algorithm selector.
///
/// Both algorithms overwrite the target grid with walls and carve a
/// connected passage tree into it; they differ in traversal order and in
/// how aggressively the post-pass reopens loop-creating shortcuts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algo {
    /// Depth-first carve: long winding corridors, sparse loops.
    #[default]
    Dfs,
    /// Breadth-first carve with alternating-end popping: blockier
    /// layouts, denser loop thinning.
    Bfs,
}

impl fmt::Display for Algo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dfs => write!(f, "DFS"),
            Self::Bfs => write!(f, "BFS"),
        }
    }
}

impl FromStr for Algo {
    type Err = ParseAlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DFS" => Ok(Self::Dfs),
            "BFS" => Ok(Self::Bfs),
            _ => Err(ParseAlgoError {
                input: s.to_string(),
            }),
        }
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgoError {
    /// The unrecognised input.
    pub input: String,
}

impl fmt::Display for ParseAlgoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm {:?}, expected \"DFS\" or \"BFS\"", self.input)
    }
}

impl Error for ParseAlgoError {}

// ── MarkerSpec ─────────────────────────────────────────────────────

/// How a new maze acquires its markers.
#[derive(Clone, Debug, Default)]
pub enum MarkerSpec {
    /// No markers.
    #[default]
    None,
    /// Synthesize `n` markers with positional decimal ids, placed evenly
    /// around an ellipse centred on the grid.
    Count(usize),
    /// Synthesize one marker per id, same ellipse placement.
    Ids(Vec<String>),
    /// Use these markers as given. Positions are not adjusted at
    /// construction; call
    /// [`fix_markers_position`](crate::Maze::fix_markers_position) after
    /// mutating the grid underneath them.
    Markers(Vec<Marker>),
}

impl MarkerSpec {
    /// Parse a comma-separated id list: `"start,goal,key"`.
    ///
    /// Pieces are kept verbatim (no trimming), matching the lookup
    /// behaviour of [`find_marker`](crate::Maze::find_marker), which
    /// trims its query only.
    pub fn ids_from_list(list: &str) -> Self {
        Self::Ids(list.split(',').map(str::to_string).collect())
    }
}

// ── MazeConfig ─────────────────────────────────────────────────────

/// Complete configuration for constructing a [`Maze`](crate::Maze).
///
/// # Examples
///
/// ```
/// use warren_engine::{Algo, MarkerSpec, Maze, MazeConfig};
///
/// let maze = Maze::new(MazeConfig {
///     width: 12,
///     height: 9,
///     algo: Some(Algo::Bfs),
///     markers: MarkerSpec::Count(2),
///     ..MazeConfig::default()
/// });
/// assert_eq!(maze.markers().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MazeConfig {
    /// Number of grid rows.
    pub width: u32,
    /// Length of each row.
    pub height: u32,
    /// Carving algorithm. `None` skips generation and fills the grid
    /// with [`value`](MazeConfig::value) instead. The chosen algorithm
    /// is remembered for [`randomize`](crate::Maze::randomize).
    pub algo: Option<Algo>,
    /// Marker acquisition. Default: none.
    pub markers: MarkerSpec,
    /// Fill value for the ungenerated grid: `true` all walls, `false`
    /// all passage. Default: `false`. Ignored when `algo` is set.
    pub value: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algo_round_trips_through_strings() {
        assert_eq!("DFS".parse::<Algo>().unwrap(), Algo::Dfs);
        assert_eq!("BFS".parse::<Algo>().unwrap(), Algo::Bfs);
        assert_eq!(Algo::Dfs.to_string(), "DFS");
        assert_eq!(Algo::Bfs.to_string(), "BFS");
    }

    #[test]
    fn unknown_algo_fails_to_parse() {
        let err = "prim".parse::<Algo>().unwrap_err();
        assert_eq!(err.input, "prim");
        let msg = err.to_string();
        assert!(msg.contains("prim"));
        assert!(msg.contains("DFS"));
    }

    #[test]
    fn default_algo_is_dfs() {
        assert_eq!(Algo::default(), Algo::Dfs);
    }

    #[test]
    fn ids_from_list_keeps_pieces_verbatim()  {
        let spec = MarkerSpec::ids_from_list("a, b,c");
        match spec {
            MarkerSpec::Ids(ids) => assert_eq!(ids, vec!["a", " b", "c"]),
            other => panic!("expected Ids, got {other:?}"),
        }
    }

    #[test]
    fn default_config_is_empty() {
        let cfg = MazeConfig::default();
        assert_eq!(cfg.width, 0);
        assert_eq!(cfg.height, 0);
        assert!(cfg.algo.is_none());
        assert!(matches!(cfg.markers, MarkerSpec::None));
        assert!(!cfg.value);
    }
}
