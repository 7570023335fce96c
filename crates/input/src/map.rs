//! Key mapping from terminal events to game input.

use crate::types::{Direction, InputEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to an input event.
///
/// Arrow keys plus the WASD and vim (hjkl) aliases steer; space is the
/// restart gesture. Everything else is ignored.
pub fn handle_key_event(key: KeyEvent) -> Option<InputEvent> {
    let dir = match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Direction::Left,
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Direction::Right,
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Direction::Up,
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Direction::Down,
        KeyCode::Char(' ') => return Some(InputEvent::RestartGesture),
        _ => return None,
    };
    Some(InputEvent::ArrowKey(dir))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
