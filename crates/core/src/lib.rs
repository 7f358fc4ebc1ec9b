//! Core game module - live game state around the pure board engine
//!
//! The board engine (`tui-2048-engine`) decides what a move does to a grid.
//! This crate decides what happens to the *game*: it owns the live grid and the
//! cumulative score, spawns tiles, counts moves and tracks whether the grid has
//! reached a terminal state. It has no dependencies on terminal I/O.
//!
//! # Module Structure
//!
//! - [`config`]: environment-driven settings for the binary
//! - [`game_state`]: the live game and its Active/Terminal lifecycle
//! - [`rng`]: seeded tile spawner (uniform empty cell, 95% twos / 5% fours)
//! - [`snapshot`]: owned copy of the state for rendering
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, GameAction};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//! assert_eq!(game.grid().empty_count(), 15);
//!
//! // Some direction always moves a lone tile.
//! let moved = [Direction::Left, Direction::Right]
//!     .into_iter()
//!     .any(|d| game.apply_action(GameAction::Slide(d)));
//! assert!(moved);
//! assert_eq!(game.moves(), 1);
//! ```

pub mod config;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_2048_engine as engine;
pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use game_state::{GameState, GameStatus};
pub use rng::{SimpleRng, Spawn, TileSpawner};
pub use snapshot::GameSnapshot;
