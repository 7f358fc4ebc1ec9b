//! Terminal "game renderer" module.
//!
//! Rendering happens in two steps:
//! - [`GameView`] turns a [`core::GameSnapshot`] into a [`FrameBuffer`] (pure, testable)
//! - [`TerminalRenderer`] flushes framebuffers to the terminal, diffing against the last frame
//!
//! Tile colours live in [`palette`] as a plain value-to-style decision.

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use palette::{empty_style, tile_label, tile_style};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
