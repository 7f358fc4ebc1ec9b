//! Integration tests for the game lifecycle

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_2048::core::{GameState, GameStatus};
use tui_2048::engine::Grid;
use tui_2048::input::handle_key_event;
use tui_2048::types::{Direction, GameAction};

fn grid(rows: Vec<Vec<u32>>) -> Grid {
    Grid::from_rows(rows).unwrap()
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert!(!state.started());
    assert_eq!(state.grid().empty_count(), 16);

    state.start();
    assert!(state.started());
    assert_eq!(state.grid().empty_count(), 15);
    assert!(matches!(state.best_tile(), 2 | 4));
    assert_eq!(state.status(), GameStatus::Active);
    assert_eq!(state.score(), 0);
}

#[test]
fn test_accepted_moves_score_count_and_spawn() {
    let mut state = GameState::new(7);
    state.start();

    let mut expected_score = 0;
    for step in 0..200 {
        if state.is_terminal() {
            break;
        }
        let dir = Direction::ALL[step % 4];
        let before_sum = state.grid().tile_sum();
        let before_moves = state.moves();

        if state.slide(dir) {
            expected_score += state.last_delta();
            let spawned = state.grid().tile_sum() - before_sum - state.last_delta();
            assert!(spawned == 2 || spawned == 4, "spawned {}", spawned);
            assert_eq!(state.moves(), before_moves + 1);
        } else {
            assert_eq!(state.grid().tile_sum(), before_sum);
            assert_eq!(state.moves(), before_moves);
        }
        assert_eq!(state.score(), expected_score);
    }
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameState::new(99);
    let mut b = GameState::new(99);
    a.start();
    b.start();

    for step in 0..50 {
        let dir = Direction::ALL[(step * 3) % 4];
        assert_eq!(a.slide(dir), b.slide(dir));
        assert_eq!(a.grid(), b.grid());
    }
    assert_eq!(a.score(), b.score());
}

#[test]
fn test_terminal_grid_only_accepts_restart() {
    let mut state = GameState::from_grid(grid(vec![vec![2, 4], vec![4, 2]]), 1);
    assert!(state.started());
    assert!(state.is_terminal());

    for dir in Direction::ALL {
        assert!(!state.apply_action(GameAction::Slide(dir)));
    }
    assert_eq!(state.moves(), 0);

    assert!(state.apply_action(GameAction::Restart));
    assert_eq!(state.status(), GameStatus::Active);
    assert_eq!(state.episode_id(), 1);
    assert_eq!(state.score(), 0);
    assert_eq!(state.grid().rows(), 2);
    assert_eq!(state.grid().empty_count(), 3);
}

#[test]
fn test_merge_then_spawn_fills_the_freed_cell() {
    let mut state = GameState::from_grid(grid(vec![vec![2, 2], vec![4, 8]]), 3);
    assert!(state.slide(Direction::Left));

    assert_eq!(state.score(), 4);
    assert_eq!(state.last_delta(), 4);
    assert_eq!(state.grid().get(0, 0), Some(4));
    assert!(matches!(state.grid().get(0, 1), Some(2) | Some(4)));
    assert!(state.grid().is_full());
}

#[test]
fn test_reaching_2048_is_reported_and_play_continues() {
    let mut state = GameState::from_grid(grid(vec![vec![1024, 1024, 0]]), 5);
    assert!(state.slide(Direction::Left));
    assert_eq!(state.score(), 2048);
    assert_eq!(state.best_tile(), 2048);

    let snap = state.snapshot();
    assert!(snap.won());
    assert!(snap.playable());
}

#[test]
fn test_keys_drive_the_game() {
    let mut state = GameState::from_grid(grid(vec![vec![0, 0, 2, 2]]), 11);

    let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
    assert_eq!(handle_key_event(key), None);

    let key = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
    let action = handle_key_event(key).unwrap();
    assert!(state.apply_action(action));
    assert_eq!(state.grid().get(0, 0), Some(4));
    assert_eq!(state.score(), 4);

    let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
    let action = handle_key_event(key).unwrap();
    assert!(state.apply_action(action));
    assert_eq!(state.score(), 0);
    assert_eq!(state.grid().empty_count(), 3);
}

#[test]
fn test_snapshot_tracks_state() {
    let mut state = GameState::new(42);
    state.start();
    state.slide(Direction::Down);

    let snap = state.snapshot();
    assert_eq!(&snap.grid, state.grid());
    assert_eq!(snap.score, state.score());
    assert_eq!(snap.moves, state.moves());
    assert_eq!(snap.best_tile, state.best_tile());
    assert_eq!(snap.terminal, state.is_terminal());
}
