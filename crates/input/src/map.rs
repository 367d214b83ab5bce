//! Key bindings.
//!
//! Arrows, WASD and vi keys all drive the same five actions. Letters match in
//! either case.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The action bound to `key`, if any.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Up => Some(GameAction::Rotate),
        // Control chords are never moves.
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
        KeyCode::Char(ch) => letter_action(ch.to_ascii_lowercase()),
        _ => None,
    }
}

fn letter_action(ch: char) -> Option<GameAction> {
    let action = match ch {
        'a' | 'h' => GameAction::MoveLeft,
        'd' | 'l' => GameAction::MoveRight,
        's' | 'j' => GameAction::SoftDrop,
        'w' | 'k' => GameAction::Rotate,
        ' ' => GameAction::HardDrop,
        _ => return None,
    };
    Some(action)
}

/// q, Esc or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char(ch) => ch.eq_ignore_ascii_case(&'q'),
        _ => false,
    }
}
