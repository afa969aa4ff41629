//! RNG module - uniform piece and color generation
//!
//! Every draw picks a shape uniformly from the configured set with no memory of
//! earlier draws (no bag). Colors are random 24-bit values.
//!
//! The generator is a simple LCG so that a seed fully determines a game.

use crate::shape::ShapeKind;
use crate::types::{Color, PieceSet};

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

    /// Generate random value in range [0, max). `max == 0` yields 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // High bits of an LCG are far better distributed than the low ones.
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }

    /// Current internal state (seeds a continuation of this sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Memoryless shape + color source
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    set: PieceSet,
    rng: SimpleRng,
}

impl PieceGenerator {
    pub fn new(set: PieceSet, seed: u32) -> Self {
        Self {
            set,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn set(&self) -> PieceSet {
        self.set
    }

    /// Draw the next shape, uniformly from the set
    pub fn next_kind(&mut self) -> ShapeKind {
        let kinds = ShapeKind::all(self.set);
        kinds[self.rng.next_range(kinds.len() as u32) as usize]
    }

    /// Draw a random 24-bit color
    pub fn next_color(&mut self) -> Color {
        Color::from_u24(self.rng.next_u32() >> 8)
    }

    /// RNG state, for continuing the same sequence in a fresh session
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}
