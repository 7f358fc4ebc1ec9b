//! Terminal 2048 runner (default binary).
//!
//! The loop is turn-based: render, block on one key, apply it, repeat.
//! Once the grid is terminal only restart and quit do anything.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_2048::core::{GameConfig, GameSnapshot, GameState};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let seed = config.resolve_seed();
    let mut game = GameState::with_size(config.rows, config.cols, seed)
        .with_context(|| format!("invalid grid size {}x{}", config.rows, config.cols))?;
    info!("config: {:?}, seed {}", config, seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    info!(
        "quit with score {} (best tile {}, {} moves)",
        game.score(),
        game.best_tile(),
        game.moves()
    );
    println!(
        "Score: {}  Best tile: {}  Moves: {}",
        game.score(),
        game.best_tile(),
        game.moves()
    );
    Ok(())
}

/// Logs go to `TUI2048_LOG_PATH` only; stderr would scribble over the game screen.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    game.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                // Unmapped keys attempt no move.
                if let Some(action) = handle_key_event(key) {
                    game.apply_action(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
