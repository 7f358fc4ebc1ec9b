//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Moves are
//! discrete (one key press, one slide), so there is no repeat handling here:
//! the game loop simply ignores auto-repeat events.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
