//! Occupancy grid and neighbourhood queries for Warren mazes.
//!
//! The central type is [`Grid`]: a rectangular boolean matrix where
//! `true` marks a wall and `false` a passage, together with the
//! orthogonal and diagonal neighbour resolvers the carving generators
//! and the pathfinder are built on. Resolvers filter out-of-bounds
//! probes instead of failing — stepping off the edge is normal during
//! traversal, not an error.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;

pub use grid::Grid;
