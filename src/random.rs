//! Random number generation for puzzle creation.
//!
//! All randomized choices in the engine draw from a single explicitly
//! threaded PRNG, so a given seed always reproduces the same puzzle.

use rand_pcg::Pcg64Mcg;
use rand_seeder::Seeder;

pub use rand::prelude::*;

/// The PRNG we use for generating puzzles.
pub type Random = Pcg64Mcg;

/// Makes a new PRNG from an integer seed.
pub fn new_random(seed: u64) -> Random {
  Random::seed_from_u64(seed)
}

/// Makes a new PRNG seeded from a string, handy in tests.
pub fn new_random_str(seed: &str) -> Random {
  Seeder::from(seed).into_rng()
}
