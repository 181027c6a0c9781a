//! Random number generator abstraction.
//!
//! In production, this wraps a real RNG. In tests, a seeded or scripted
//! implementation is injected.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::RngConfig;

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `i32` in the range `[min, max]` inclusive.
    ///
    /// Callers guarantee `min <= max`.
    fn next_i32_range(&mut self, min: i32, max: i32) -> i32;

    /// Generate a random `bool`, each value with probability 1/2.
    fn next_bool(&mut self) -> bool;
}

/// Production RNG backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct StdRngSource(StdRng);

impl StdRngSource {
    /// Build a generator from `config`, seeding from the OS when no seed is set.
    #[must_use]
    pub fn from_config(config: &RngConfig) -> Self {
        match config.seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_os_rng()),
        }
    }
}

impl DeterministicRng for StdRngSource {
    fn next_i32_range(&mut self, min: i32, max: i32) -> i32 {
        self.0.random_range(min..=max)
    }

    fn next_bool(&mut self) -> bool {
        self.0.random()
    }
}
