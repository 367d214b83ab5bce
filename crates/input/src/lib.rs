//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and polls the
//! terminal for at most one key per call. The engine never sees a key event.

pub mod map;
pub mod poll;

pub use termtris_types as types;

pub use map::{handle_key_event, should_quit};
pub use poll::{poll_key, wait_for_key, KeyInput};
