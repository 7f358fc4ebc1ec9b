//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Unrecognised keys map to `None`: no move is attempted.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::Slide(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::Slide(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::Slide(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::Slide(Direction::Right))
        }

        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn slide(dir: Direction) -> Option<GameAction> {
        Some(GameAction::Slide(dir))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), slide(Direction::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Down)), slide(Direction::Down));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), slide(Direction::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Right)), slide(Direction::Right));
    }

    #[test]
    fn test_vim_and_wasd_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('k'))), slide(Direction::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('J'))), slide(Direction::Down));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('h'))), slide(Direction::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('L'))), slide(Direction::Right));

        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('W'))), slide(Direction::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('s'))), slide(Direction::Down));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('a'))), slide(Direction::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('D'))), slide(Direction::Right));
    }

    #[test]
    fn test_restart_and_unmapped_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char(' '))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
