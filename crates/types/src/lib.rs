//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, so they can be used
//! by the board engine, the game state, the key mapping and the renderer alike.
//!
//! # Grid Dimensions
//!
//! The classic puzzle is played on a 4x4 grid. The engine itself works for any
//! `rows x cols >= 1x1`; these constants only pick the default.
//!
//! # Spawn Weights
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_LOW_TILE` | 2 | Tile spawned most of the time |
//! | `SPAWN_HIGH_TILE` | 4 | Tile spawned occasionally |
//! | `SPAWN_HIGH_PERCENT` | 5 | Chance (out of 100) of a high spawn |
//! | `INITIAL_TILES` | 1 | Tiles spawned when a game starts |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! // Left and Right sweep rows, Up and Down sweep columns
//! assert!(Direction::Left.is_horizontal());
//! assert!(!Direction::Up.is_horizontal());
//! assert_eq!(Direction::Left.as_str(), "left");
//!
//! let action = GameAction::Slide(Direction::Up);
//! assert_ne!(action, GameAction::Restart);
//!
//! // Grid dimensions
//! assert_eq!(DEFAULT_ROWS, 4);
//! assert_eq!(DEFAULT_COLS, 4);
//! ```

/// Default grid height in cells
pub const DEFAULT_ROWS: usize = 4;

/// Default grid width in cells
pub const DEFAULT_COLS: usize = 4;

/// Value of the common spawned tile
pub const SPAWN_LOW_TILE: Tile = 2;

/// Value of the rare spawned tile
pub const SPAWN_HIGH_TILE: Tile = 4;

/// Percent chance that a spawn produces `SPAWN_HIGH_TILE` (95% / 5% split)
pub const SPAWN_HIGH_PERCENT: u32 = 5;

/// Number of tiles placed on the grid when a game starts
pub const INITIAL_TILES: usize = 1;

/// Tile value that counts as "reaching 2048"
pub const WINNING_TILE: Tile = 2048;

/// A single cell value: 0 is empty, otherwise a positive power of two.
pub type Tile = u32;

/// Cumulative (or per-move) score.
pub type Score = u64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_weights_defaults() {
        assert_eq!(SPAWN_LOW_TILE, 2);
        assert_eq!(SPAWN_HIGH_TILE, 4);
        assert_eq!(SPAWN_HIGH_PERCENT, 5);
        assert!(SPAWN_HIGH_PERCENT < 100);
    }

    #[test]
    fn direction_names() {
        let names: Vec<&str> = Direction::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(names, vec!["up", "down", "left", "right"]);
    }

    #[test]
    fn direction_axes() {
        assert!(Direction::Left.is_horizontal());
        assert!(Direction::Right.is_horizontal());
        assert!(!Direction::Up.is_horizontal());
        assert!(!Direction::Down.is_horizontal());
    }
}

/// The four directions tiles can be slid towards
///
/// The direction names the grid edge the tiles travel to:
/// - **Up**: towards row 0
/// - **Down**: towards the last row
/// - **Left**: towards column 0
/// - **Right**: towards the last column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// True when the move processes rows (Left/Right) rather than columns.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Actions a player can apply to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide (and merge) every tile towards the given edge
    Slide(Direction),
    /// Throw away the current grid and start a new game
    Restart,
}

