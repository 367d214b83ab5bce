//! Terminal key polling.
//!
//! The game loop takes at most one key per iteration. [`poll_key`] waits no
//! longer than the given timeout, so the gravity timer is never starved.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::types::GameAction;

/// What a single key press means to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Quit,
    Action(GameAction),
    /// A key with no binding
    Ignored,
}

impl KeyInput {
    pub fn from_key(key: KeyEvent) -> Self {
        if should_quit(key) {
            return KeyInput::Quit;
        }
        match handle_key_event(key) {
            Some(action) => KeyInput::Action(action),
            None => KeyInput::Ignored,
        }
    }
}

/// Read one pending key, waiting at most `timeout`.
///
/// Returns `None` when nothing arrived, or when the event was not a key press
/// (resize, mouse, key release).
pub fn poll_key(timeout: Duration) -> Result<Option<KeyInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        // Held keys repeat like the terminal's own auto-repeat.
        Event::Key(key) if key.kind != KeyEventKind::Release => Ok(Some(KeyInput::from_key(key))),
        _ => Ok(None),
    }
}

/// Block until any key is pressed.
pub fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
