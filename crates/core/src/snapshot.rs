use crate::engine::Grid;
use crate::types::{Score, Tile, WINNING_TILE};

/// Render-ready copy of the game state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub score: Score,
    pub last_delta: Score,
    pub moves: u32,
    pub best_tile: Tile,
    pub terminal: bool,
    pub episode_id: u32,
}

impl GameSnapshot {
    /// True once any tile has reached [`WINNING_TILE`]. Play continues either way.
    pub fn won(&self) -> bool {
        self.best_tile >= WINNING_TILE
    }

    pub fn playable(&self) -> bool {
        !self.terminal
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            score: 0,
            last_delta: 0,
            moves: 0,
            best_tile: 0,
            terminal: false,
            episode_id: 0,
        }
    }
}
