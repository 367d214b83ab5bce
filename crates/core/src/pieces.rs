//! Pieces module - tetromino shapes and rotation rules
//!
//! Every shape is four `(row, col)` offsets relative to the piece origin. The
//! order of the offsets matters: the second one is the pivot for pivot-rotated
//! kinds and stays in place while the others turn around it.
//!
//! Rotation is a plain reject-or-accept affair: the caller computes the
//! candidate with [`Piece::rotated`] and throws it away if it collides. There
//! are no kick tables.

use crate::types::PieceKind;

/// Offset of a single mino relative to the piece origin, `(row, col)`
pub type MinoOffset = (i16, i16);

/// Shape of a piece - 4 mino offsets from the piece origin
pub type PieceShape = [MinoOffset; 4];

/// Index of the pivot offset in every pivot-rotated shape
pub const PIVOT_INDEX: usize = 1;

/// Get the spawn shape (mino offsets) for a piece kind
pub fn spawn_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(0, 0), (0, 1), (0, 2), (0, 3)],
        PieceKind::O => [(0, 0), (0, 1), (1, 0), (1, 1)],
        PieceKind::T => [(0, 1), (1, 0), (1, 1), (1, 2)],
        PieceKind::S => [(0, 1), (0, 2), (1, 0), (1, 1)],
        PieceKind::Z => [(0, 0), (0, 1), (1, 1), (1, 2)],
        PieceKind::J => [(0, 0), (1, 0), (1, 1), (1, 2)],
        PieceKind::L => [(0, 2), (1, 0), (1, 1), (1, 2)],
    }
}

/// How a piece kind turns when the player rotates it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationRule {
    /// Rotation-invariant (O)
    Fixed,
    /// Straight line flips between horizontal and vertical (I)
    AxisFlip,
    /// 90° clockwise about the offset at the given index (T, S, Z, J, L)
    Pivot(usize),
}

impl RotationRule {
    /// Rule for a piece kind
    pub fn for_kind(kind: PieceKind) -> Self {
        match kind {
            PieceKind::O => RotationRule::Fixed,
            PieceKind::I => RotationRule::AxisFlip,
            PieceKind::T | PieceKind::S | PieceKind::Z | PieceKind::J | PieceKind::L => {
                RotationRule::Pivot(PIVOT_INDEX)
            }
        }
    }

    /// Apply the rule to a shape, producing the candidate shape
    pub fn apply(self, shape: &PieceShape) -> PieceShape {
        match self {
            RotationRule::Fixed => *shape,
            RotationRule::AxisFlip => flip_axis(shape),
            RotationRule::Pivot(index) => rotate_cw_about(shape, index),
        }
    }
}

/// Toggle a straight line between horizontal and vertical, anchored at the
/// minimum corner of its bounding box.
pub fn flip_axis(shape: &PieceShape) -> PieceShape {
    let min_row = shape.iter().map(|&(r, _)| r).min().unwrap_or(0);
    let min_col = shape.iter().map(|&(_, c)| c).min().unwrap_or(0);
    let horizontal = shape.iter().all(|&(r, _)| r == shape[0].0);

    let mut out = *shape;
    for (i, cell) in out.iter_mut().enumerate() {
        let i = i as i16;
        *cell = if horizontal {
            (min_row + i, min_col)
        } else {
            (min_row, min_col + i)
        };
    }
    out
}

/// Turn every offset 90° clockwise (screen space, rows grow downward) about
/// the offset at `pivot`. The pivot itself does not move.
pub fn rotate_cw_about(shape: &PieceShape, pivot: usize) -> PieceShape {
    let (pr, pc) = shape[pivot];
    shape.map(|(r, c)| (pr + (c - pc), pc - (r - pr)))
}

/// A piece placed on (or above) the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: PieceShape,
    /// Origin row; absolute cells are `row + offset.0`
    pub row: i16,
    /// Origin column; absolute cells are `col + offset.1`
    pub col: i16,
}

impl Piece {
    /// Create a piece at the spawn origin: row 0, column `width / 2 - 2`
    pub fn spawn(kind: PieceKind, board_width: u16) -> Self {
        Self {
            kind,
            shape: spawn_shape(kind),
            row: 0,
            // u16::MAX / 2 still fits an i16
            col: (board_width / 2) as i16 - 2,
        }
    }

    /// Absolute `(row, col)` cells.
    ///
    /// Saturates at the `i16` range, which lies outside any board.
    pub fn cells(&self) -> [(i16, i16); 4] {
        self.shape
            .map(|(r, c)| (self.row.saturating_add(r), self.col.saturating_add(c)))
    }

    /// Candidate translated by `(d_row, d_col)`
    pub fn translated(&self, d_row: i16, d_col: i16) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
            ..*self
        }
    }

    /// Candidate with the kind's rotation rule applied
    pub fn rotated(&self) -> Self {
        Self {
            shape: RotationRule::for_kind(self.kind).apply(&self.shape),
            ..*self
        }
    }
}
