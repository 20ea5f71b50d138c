//! RNG module - randomness used for spawning
//!
//! The game only ever needs two things from a random source: an index into the
//! piece catalog and a column inside a range. [`RandomSource`] is that seam, so
//! tests and replays can plug in something deterministic.
//!
//! Two sources are provided:
//! - [`SimpleRng`]: small LCG, fully determined by its seed
//! - [`OsRandom`]: `rand`'s `StdRng` seeded from OS entropy, for real play

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform choices for piece and column selection.
pub trait RandomSource {
    /// Uniform value in `0..upper`. `upper` must be non-zero.
    fn pick_index(&mut self, upper: usize) -> usize;

    /// Uniform value in `low..high`. The range must be non-empty.
    fn pick_range(&mut self, low: usize, high: usize) -> usize {
        low + self.pick_index(high - low)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG cycle quickly; use the high half.
        (self.next_u32() >> 16) % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn pick_index(&mut self, upper: usize) -> usize {
        self.next_range(upper as u32) as usize
    }
}

/// Entropy-seeded generator for interactive games
#[derive(Debug, Clone)]
pub struct OsRandom {
    rng: StdRng,
}

impl OsRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for OsRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for OsRandom {
    fn pick_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}
