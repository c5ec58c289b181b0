//! Shared fixtures for Warren benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use warren_engine::{generate_with, Algo};
use warren_space::Grid;

/// A reproducible carved grid for pathfinding benchmarks.
pub fn reference_maze(algo: Algo, size: u32, seed: u64) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_with(algo, size, size, &mut rng)
}
