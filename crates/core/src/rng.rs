//! RNG module - block generation with difficulty scaling
//!
//! Every new block gets an independent uniform color and a shape drawn from
//! one of two pools. Below score 250 all shapes are equally likely; from then
//! on each difficulty level adds 8% chance of sampling only from the large
//! shapes (4+ cells). The chance is not clamped: once it reaches 1.0 every
//! roll lands in the large pool.
//!
//! Randomness comes from a [`RandomSource`] so tests can script exact
//! sequences. [`SimpleRng`] is the seedable default.

use crate::shapes::{Block, ShapeId, LARGE_SHAPE_INDICES, SHAPE_COUNT};
use crate::types::{BlockColor, BLOCKS_PER_SET, LARGE_CHANCE_PER_LEVEL, LEVEL_SCORE_STEP, PALETTE_SIZE};

/// Source of uniform random numbers for block generation
pub trait RandomSource {
    /// Next uniformly distributed u32
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, max)`. `max` must be nonzero.
    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Uniform value in `[0, 1)`
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
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

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Difficulty level for a score: one level per 250 points
pub fn difficulty_level(score: u32) -> u32 {
    score / LEVEL_SCORE_STEP
}

/// Probability that a new block is drawn from the large pool.
///
/// Grows without bound; values of 1.0 or more mean "always large".
pub fn large_shape_chance(score: u32) -> f64 {
    f64::from(difficulty_level(score)) * LARGE_CHANCE_PER_LEVEL
}

/// Generates random blocks from an injected random source
#[derive(Debug, Clone)]
pub struct BlockGenerator<R> {
    rng: R,
}

impl<R: RandomSource> BlockGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw one block for the given score.
    ///
    /// Draw order is fixed (color, pool roll, shape index) so seeded runs are
    /// reproducible.
    pub fn random_block(&mut self, score: u32) -> Block {
        let color_index = self.rng.next_range(PALETTE_SIZE as u32) as usize;
        let color = BlockColor::ALL[color_index];

        let roll = self.rng.next_unit();
        let shape_index = if roll < large_shape_chance(score) {
            let i = self.rng.next_range(LARGE_SHAPE_INDICES.len() as u32) as usize;
            LARGE_SHAPE_INDICES[i]
        } else {
            self.rng.next_range(SHAPE_COUNT as u32) as u8
        };

        // Both pools only hold catalog indices.
        Block::new(ShapeId(shape_index), color)
    }

    /// Three independent draws. Nothing guarantees the set is placeable.
    pub fn three_blocks(&mut self, score: u32) -> [Block; BLOCKS_PER_SET] {
        [
            self.random_block(score),
            self.random_block(score),
            self.random_block(score),
        ]
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}
