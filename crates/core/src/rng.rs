//! RNG module - deterministic gem generation
//!
//! A simple LCG drives every random draw in the engine: the initial board
//! fill and the post-collapse refill both pull from the same `GemStream`.
//! Same seed, same board, same cascades.

use gemgrid_types::{GemKind, GEM_KIND_COUNT};

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
        self.next_u32() % max
    }

    /// Current internal state (for restarting a session with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Infinite stream of uniformly random gem kinds
///
/// Unlike bag-based randomizers, every draw is an independent uniform pick
/// from the alphabet; refill gems may legally recreate runs, which is what
/// keeps cascades going.
#[derive(Debug, Clone)]
pub struct GemStream {
    rng: SimpleRng,
}

impl GemStream {
    /// Create a new stream with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next gem kind
    pub fn next(&mut self) -> GemKind {
        let index = self.rng.next_range(GEM_KIND_COUNT as u32) as usize;
        GemKind::ALL[index]
    }

    /// Current RNG state (for restarting a session with the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for GemStream {
    fn default() -> Self {
        Self::new(1)
    }
}
