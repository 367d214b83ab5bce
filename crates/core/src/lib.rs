//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state. It has **no dependencies**
//! on terminal rendering or input, which makes it:
//!
//! - **Deterministic**: piece kinds come from an injected [`PieceSource`], so a
//!   seed (or a script) fixes the whole game
//! - **Testable**: every rule is a small function with its own unit tests
//! - **Portable**: the terminal loop is just one possible caller
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid of occupied/empty cells, row removal
//! - [`pieces`]: tetromino offset tables and per-kind rotation rules
//! - [`rng`]: piece sources (seeded uniform random, scripted)
//! - [`scoring`]: line-clear points and the score-driven fall interval
//! - [`engine`]: the [`Engine`] tying it all together
//!
//! # Game Rules
//!
//! - **Spawn**: row 0, column `width / 2 - 2`; a blocked spawn ends the game
//! - **Rotation**: O never turns, I flips axis, the rest turn 90° clockwise
//!   about their second cell; a colliding rotation is simply rejected
//! - **Settle**: freeze the piece, clear full rows, spawn the next piece
//! - **Scoring**: 100 points per row
//! - **Speed**: fall interval `max(100, 500 - floor(score / 1000) * 50)` ms
//!
//! # Example
//!
//! ```
//! use termtris_core::{Engine, ScriptedPieces};
//! use termtris_types::{GameAction, PieceKind};
//!
//! let mut game = Engine::new(10, 20, ScriptedPieces::repeat(PieceKind::I));
//! assert!(!game.game_over());
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.board().occupied_count(), 4);
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod engine;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use termtris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use engine::Engine;
pub use pieces::{spawn_shape, Piece, PieceShape, RotationRule};
pub use rng::{PieceSource, ScriptedPieces, SeededPieces};
pub use scoring::{fall_interval_ms, line_clear_score};
