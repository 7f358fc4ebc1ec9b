//! Board engine - pure sliding/merging rules
//!
//! This crate is the heart of the game. It owns no state between calls and
//! performs no I/O: callers hand it a [`Grid`] snapshot and a direction and get
//! a fresh grid back.
//!
//! # Module Structure
//!
//! - [`grid`]: the `rows x cols` tile grid and its construction checks
//! - [`moves`]: direction-generic slide/merge sweep and terminal detection
//!
//! # Rules
//!
//! - Tiles slide towards the chosen edge over empty cells
//! - Two equal tiles that meet merge into one tile of double the value
//! - The score delta of a move is the sum of every merged tile it creates
//! - A merged tile never merges again in the same move
//! - With three equal tiles in a line, the pair nearest the edge merges
//!
//! # Example
//!
//! ```
//! use tui_2048_engine::{apply_move, is_terminal, Grid};
//! use tui_2048_types::Direction;
//!
//! let grid = Grid::from_rows(vec![vec![2, 4], vec![2, 4]]).unwrap();
//! let outcome = apply_move(&grid, Direction::Up);
//! assert_eq!(outcome.grid.to_rows(), vec![vec![4, 8], vec![0, 0]]);
//! assert_eq!(outcome.score_delta, 12);
//!
//! // The original grid is untouched.
//! assert_eq!(grid.get(1, 0), Some(2));
//! assert!(!is_terminal(&grid));
//! ```

pub mod grid;
pub mod moves;

pub use tui_2048_types as types;

pub use grid::{is_valid_tile, Grid, GridError};
pub use moves::{apply_move, can_move, is_terminal, LineMap, MoveOutcome};
