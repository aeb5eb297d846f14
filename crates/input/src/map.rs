//! Key mapping from terminal events to engine commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to engine commands.
///
/// Letter keys follow [`Command::from_char`]; arrows and space are aliases.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Up => Some(Command::RotateLeft),
        KeyCode::Down => Some(Command::RotateRight),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Command::Drop),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Command::from_char(c)
        }
        _ => None,
    }
}

/// Check if key asks to leave the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key answers "yes" to a confirmation prompt.
pub fn is_confirm(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('y')
}
