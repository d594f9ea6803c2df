//! Key mapping from terminal events to scene actions.

use crate::types::SceneAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to scene actions.
pub fn handle_key_event(key: KeyEvent) -> Option<SceneAction> {
    match key.code {
        // Rotation
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(SceneAction::RotateLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(SceneAction::RotateRight)
        }

        // Zoom
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Some(SceneAction::ZoomIn),
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => Some(SceneAction::ZoomOut),

        // Scene control
        KeyCode::Tab | KeyCode::Char('n') | KeyCode::Char('N') => Some(SceneAction::NextScene),
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => Some(SceneAction::TogglePause),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
