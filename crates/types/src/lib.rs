//! Shared types and constants
//!
//! Plain data with no dependencies, used by the engine, the terminal view and
//! the key mapping.
//!
//! Coordinates are `(row, col)` with row 0 at the top and rows growing
//! downward. The default playfield is 10 columns by 20 rows.
//!
//! # Speed Progression
//!
//! | Constant | Value | Meaning |
//! |----------|-------|---------|
//! | `BASE_FALL_INTERVAL_MS` | 500 | Gravity interval at score 0 |
//! | `FALL_INTERVAL_STEP_MS` | 50 | Reduction per speed tier |
//! | `SCORE_PER_SPEED_TIER` | 1000 | Score needed for the next tier |
//! | `FALL_INTERVAL_MIN_MS` | 100 | Floor, reached at score 8000 |

use std::fmt;

pub const DEFAULT_BOARD_WIDTH: u16 = 10;
pub const DEFAULT_BOARD_HEIGHT: u16 = 20;

/// Points awarded per cleared row
pub const SCORE_PER_LINE: u32 = 100;

pub const BASE_FALL_INTERVAL_MS: u32 = 500;
pub const FALL_INTERVAL_STEP_MS: u32 = 50;
pub const SCORE_PER_SPEED_TIER: u32 = 1000;
pub const FALL_INTERVAL_MIN_MS: u32 = 100;

/// Upper bound on one input wait, so the screen redraws at roughly 60 FPS
pub const FRAME_MS: u32 = 16;

/// Tetromino kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in table order. Uniform draws index into this.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Single-letter name, used as a log field
    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engine lifecycle.
///
/// There is no pause state: a game runs until a spawned piece collides, and
/// then stays over for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Running,
    GameOver,
}

/// Player intents the terminal loop forwards to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    /// One row down, no settling
    SoftDrop,
    /// Drop to the lowest legal row and settle
    HardDrop,
    /// Clockwise; the line piece flips axis and the square stays put
    Rotate,
}
