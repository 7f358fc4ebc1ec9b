//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the member crates as `tui_2048::{types,engine,core,input,term}` so the
//! binary, tests and benches share one import path.

pub use tui_2048_core as core;
pub use tui_2048_engine as engine;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
