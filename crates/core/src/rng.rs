//! RNG module - deterministic tile spawning
//!
//! A spawn picks an empty cell uniformly at random and, independently, a value:
//! `SPAWN_LOW_TILE` 95% of the time and `SPAWN_HIGH_TILE` otherwise.
//!
//! The generator is a small seeded LCG, so a seed fully determines a game.

use crate::engine::Grid;
use crate::types::{Tile, SPAWN_HIGH_PERCENT, SPAWN_HIGH_TILE, SPAWN_LOW_TILE};

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// A tile placed by [`TileSpawner::spawn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Places new tiles on empty cells.
#[derive(Debug, Clone)]
pub struct TileSpawner {
    rng: SimpleRng,
}

impl TileSpawner {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the value of the next spawned tile.
    pub fn next_value(&mut self) -> Tile {
        if self.rng.next_range(100) < SPAWN_HIGH_PERCENT {
            SPAWN_HIGH_TILE
        } else {
            SPAWN_LOW_TILE
        }
    }

    /// Put a 2 or 4 on a uniformly chosen empty cell.
    ///
    /// Returns `None` (and leaves the grid alone) when no cell is empty.
    pub fn spawn(&mut self, grid: &mut Grid) -> Option<Spawn> {
        let empty = grid.empty_count();
        if empty == 0 {
            return None;
        }

        let pick = self.rng.next_range(empty as u32) as usize;
        let value = self.next_value();
        let (row, col) = grid.empty_cells().nth(pick)?;
        grid.set(row, col, value);
        Some(Spawn { row, col, value })
    }

    /// Current generator state (continuing from it replays the same spawns).
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for TileSpawner {
    fn default() -> Self {
        Self::new(1)
    }
}
