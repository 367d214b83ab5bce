//! Engine module - the complete game state and its mutations
//!
//! Ties together board, active piece, piece source and scoring. The engine is
//! synchronous and does no I/O or timing of its own: the adapter decides when
//! gravity fires and calls [`Engine::tick`].
//!
//! Every mutation is a no-op once the game is over, so the final state stays
//! stable for the game-over screen.

use std::time::Duration;

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::pieces::Piece;
use crate::rng::{PieceSource, SeededPieces};
use crate::scoring::{fall_interval_ms, line_clear_score, speed_tier};
use crate::types::{GameAction, GameStatus, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

/// Complete game state
#[derive(Debug, Clone)]
pub struct Engine<S = SeededPieces> {
    board: Board,
    active: Piece,
    source: S,
    score: u32,
    lines: u32,
    fall_interval_ms: u32,
    status: GameStatus,
}

impl Engine<SeededPieces> {
    /// Default 10x20 game with a seeded random piece source
    pub fn with_seed(seed: u64) -> Self {
        Self::new(
            DEFAULT_BOARD_WIDTH,
            DEFAULT_BOARD_HEIGHT,
            SeededPieces::new(seed),
        )
    }
}

impl<S: PieceSource> Engine<S> {
    /// Create a game on an empty `width` x `height` board and spawn the first piece.
    ///
    /// Sides are clamped to [`Board::MAX_SIDE`].
    pub fn new(width: u16, height: u16, source: S) -> Self {
        Self::from_board(Board::new(width, height), source)
    }

    /// Start from a prepared board and spawn the first piece.
    pub fn from_board(board: Board, mut source: S) -> Self {
        let active = Piece::spawn(source.next_kind(), board.width());
        let mut engine = Self {
            board,
            active,
            source,
            score: 0,
            lines: 0,
            fall_interval_ms: fall_interval_ms(0),
            status: GameStatus::Running,
        };
        engine.check_spawn();
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// The injected piece source
    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared this game
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Displayed level: 1 at the start, one more per speed tier
    pub fn level(&self) -> u32 {
        speed_tier(self.score) + 1
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    /// Time between gravity steps at the current score
    pub fn fall_interval(&self) -> Duration {
        Duration::from_millis(self.fall_interval_ms as u64)
    }

    /// True iff any cell of `candidate` is outside the columns, at or below the
    /// last row, or on an occupied board cell. Cells above the top edge only
    /// face the column checks.
    pub fn collides(&self, candidate: &Piece) -> bool {
        let width = i32::from(self.board.width());
        let height = i32::from(self.board.height());
        candidate.cells().iter().any(|&(row, col)| {
            col < 0
                || i32::from(col) >= width
                || i32::from(row) >= height
                || (row >= 0 && self.board.is_occupied(row, col))
        })
    }

    /// Replace the active piece with a fresh one from the source.
    ///
    /// If the new piece collides where it spawns the game is over.
    pub fn spawn_piece(&mut self) {
        if self.game_over() {
            return;
        }
        self.active = Piece::spawn(self.source.next_kind(), self.board.width());
        self.check_spawn();
    }

    fn check_spawn(&mut self) {
        if self.collides(&self.active) {
            self.status = GameStatus::GameOver;
            info!(
                score = self.score,
                lines = self.lines,
                kind = self.active.kind.as_str(),
                "spawn blocked, game over"
            );
        } else {
            debug!(kind = self.active.kind.as_str(), col = self.active.col, "spawned piece");
        }
    }

    /// Translate the active piece by `(d_row, d_col)`.
    ///
    /// Returns false, leaving the piece where it was, if the target collides.
    pub fn try_move(&mut self, d_row: i16, d_col: i16) -> bool {
        if self.game_over() {
            return false;
        }
        let candidate = self.active.translated(d_row, d_col);
        if self.collides(&candidate) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Rotate the active piece by its kind's rule; a colliding result is discarded.
    pub fn rotate(&mut self) -> bool {
        if self.game_over() {
            return false;
        }
        let candidate = self.active.rotated();
        if candidate == self.active {
            return false;
        }
        if self.collides(&candidate) {
            trace!(kind = self.active.kind.as_str(), "rotation rejected");
            return false;
        }
        self.active = candidate;
        true
    }

    /// Write the active piece's on-board cells into the board.
    ///
    /// Cells above the top edge are dropped. The active piece itself is left in
    /// place; callers spawn its replacement.
    pub fn freeze(&mut self) {
        if self.game_over() {
            return;
        }
        for (row, col) in self.active.cells() {
            if row >= 0 {
                self.board.set(row, col, true);
            }
        }
    }

    /// Remove every full row, award points and recompute the fall interval.
    ///
    /// Scans bottom to top. After a removal the same row index is checked
    /// again, since the row above has shifted into it.
    pub fn clear_lines(&mut self) -> usize {
        if self.game_over() {
            return 0;
        }
        let mut cleared = 0usize;
        let mut row = self.board.height();
        while row > 0 {
            if self.board.is_row_full(row - 1) {
                self.board.remove_row(row - 1);
                cleared += 1;
            } else {
                row -= 1;
            }
        }

        self.score = self.score.saturating_add(line_clear_score(cleared));
        self.lines = self.lines.saturating_add(cleared as u32);
        self.fall_interval_ms = fall_interval_ms(self.score);

        if cleared > 0 {
            info!(
                cleared,
                score = self.score,
                fall_interval_ms = self.fall_interval_ms,
                "lines cleared"
            );
        }
        cleared
    }

    /// Freeze, clear lines and spawn the next piece.
    pub fn settle(&mut self) -> usize {
        if self.game_over() {
            return 0;
        }
        debug!(
            kind = self.active.kind.as_str(),
            row = self.active.row,
            col = self.active.col,
            "settling piece"
        );
        self.freeze();
        let cleared = self.clear_lines();
        self.spawn_piece();
        cleared
    }

    /// Drop the active piece to its lowest legal row and settle it.
    pub fn hard_drop(&mut self) -> usize {
        if self.game_over() {
            return 0;
        }
        while self.try_move(1, 0) {}
        self.settle()
    }

    /// One gravity step. Settles the piece if it cannot fall.
    ///
    /// Returns true if the piece moved down.
    pub fn tick(&mut self) -> bool {
        if self.game_over() {
            return false;
        }
        if self.try_move(1, 0) {
            return true;
        }
        self.settle();
        false
    }

    /// Apply one player action
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => {
                self.try_move(0, -1);
            }
            GameAction::MoveRight => {
                self.try_move(0, 1);
            }
            GameAction::SoftDrop => {
                self.try_move(1, 0);
            }
            GameAction::Rotate => {
                self.rotate();
            }
            GameAction::HardDrop => {
                self.hard_drop();
            }
        }
    }
}
