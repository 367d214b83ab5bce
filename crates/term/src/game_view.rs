//! GameView: maps an [`Engine`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout is fixed rather than centered: the score sits on row 0 and board
//! cell `(row, col)` lands at terminal column `col * 2 + 1`, terminal row
//! `row + 1`. Two columns per cell compensates for the glyph aspect ratio.

use crate::core::{Engine, PieceSource};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Glyphs used for the three kinds of board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub settled: char,
    pub empty: char,
    pub active: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            settled: '□',
            empty: '·',
            active: '■',
        }
    }
}

const TEXT: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
const SETTLED: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const EMPTY: CellStyle = CellStyle::fg(Rgb::new(90, 90, 100));

/// Color of the active piece by kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0x00, 0xf0, 0xf0),
        PieceKind::O => Rgb::new(0xf0, 0xf0, 0x00),
        PieceKind::T => Rgb::new(0xa0, 0x00, 0xf0),
        PieceKind::S => Rgb::new(0x00, 0xf0, 0x00),
        PieceKind::Z => Rgb::new(0xf0, 0x00, 0x00),
        PieceKind::J => Rgb::new(0x00, 0x00, 0xf0),
        PieceKind::L => Rgb::new(0xf0, 0xa0, 0x00),
    }
}

/// Terminal position of board cell `(row, col)`, if it is on screen.
pub fn cell_position(row: i16, col: i16) -> Option<(u16, u16)> {
    if row < 0 || col < 0 {
        return None;
    }
    let x = u16::try_from(col).ok()?.checked_mul(2)?.checked_add(1)?;
    let y = u16::try_from(row).ok()?.checked_add(1)?;
    Some((x, y))
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    glyphs: Glyphs,
}

impl GameView {
    pub fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }

    /// Render the running game into `fb`, resizing it to the viewport.
    pub fn render_into<S: PieceSource>(
        &self,
        engine: &Engine<S>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.reset(viewport.width, viewport.height);

        fb.put_str(0, 0, &format!("Score: {}", engine.score()), TEXT.bold());

        let board = engine.board();
        for (row, cells) in board.rows().enumerate() {
            for (col, &occupied) in cells.iter().enumerate() {
                let Some((x, y)) = cell_position(row as i16, col as i16) else {
                    continue;
                };
                if occupied {
                    fb.put_char(x, y, self.glyphs.settled, SETTLED);
                } else {
                    fb.put_char(x, y, self.glyphs.empty, EMPTY);
                }
            }
        }

        let active = engine.active();
        let style = CellStyle::fg(piece_color(active.kind)).bold();
        for (row, col) in active.cells() {
            if let Some((x, y)) = cell_position(row, col) {
                fb.put_char(x, y, self.glyphs.active, style);
            }
        }

        let panel_x = board.width().saturating_mul(2).saturating_add(3);
        fb.put_str(panel_x, 1, &format!("Lines: {}", engine.lines()), TEXT);
        fb.put_str(panel_x, 2, &format!("Level: {}", engine.level()), TEXT);
    }

    /// Render the final screen: the score and a prompt to exit.
    ///
    /// Lines are centered over the board the way the running view lays it out.
    pub fn render_game_over_into(
        &self,
        score: u32,
        board_width: u16,
        board_height: u16,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.reset(viewport.width, viewport.height);

        let span = board_width.saturating_mul(2);
        let message = format!("Game Over, Score: {}", score);
        let prompt = "Press any key to exit...";

        let y = board_height / 2;
        fb.put_str(centered(span, &message), y, &message, TEXT.bold());
        fb.put_str(centered(span, prompt), y.saturating_add(1), prompt, TEXT);
    }
}

fn centered(span: u16, text: &str) -> u16 {
    span.saturating_sub(text.chars().count() as u16) / 2
}
