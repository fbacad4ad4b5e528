//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Arrows and WASD move the piece across the well footprint, space hard-drops,
/// and x/y/z rotate about the matching axis.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement across the footprint
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::MoveUp),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::MoveDown),

        // Rotation, one key per axis
        KeyCode::Char('x') | KeyCode::Char('X') => Some(GameAction::RotateX),
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(GameAction::RotateY),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(GameAction::RotateZ),

        // Hard drop
        KeyCode::Char(' ') => Some(GameAction::Drop),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key should start a new game.
pub fn should_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}
