//! Pieces module tests - shape tables and rotation rules

use std::collections::HashSet;

use termtris::core::pieces::{flip_axis, rotate_cw_about, spawn_shape, Piece, RotationRule};
use termtris::types::PieceKind;

// ============== Shape Tests ==============

/// Normalize a shape so its bounding box starts at (0, 0).
fn normalized(cells: &[(i16, i16)]) -> Vec<(i16, i16)> {
    let min_r = cells.iter().map(|c| c.0).min().unwrap();
    let min_c = cells.iter().map(|c| c.1).min().unwrap();
    let mut out: Vec<_> = cells.iter().map(|&(r, c)| (r - min_r, c - min_c)).collect();
    out.sort_unstable();
    out
}

/// The four clockwise orientations of a shape, normalized.
fn orientations(cells: &[(i16, i16)]) -> Vec<Vec<(i16, i16)>> {
    let mut current: Vec<_> = cells.to_vec();
    let mut out = Vec::new();
    for _ in 0..4 {
        out.push(normalized(&current));
        current = current.iter().map(|&(r, c)| (c, -r)).collect();
    }
    out
}

#[test]
fn test_every_shape_has_four_distinct_cells() {
    for kind in PieceKind::ALL {
        let shape = spawn_shape(kind);
        let unique: HashSet<_> = shape.iter().collect();
        assert_eq!(unique.len(), 4, "{:?}", kind);
    }
}

#[test]
fn test_every_shape_is_connected() {
    for kind in PieceKind::ALL {
        let shape = spawn_shape(kind);
        for &(r, c) in &shape {
            let has_neighbour = shape
                .iter()
                .any(|&(r2, c2)| (r - r2).abs() + (c - c2).abs() == 1);
            assert!(has_neighbour, "{:?} cell ({}, {}) is isolated", kind, r, c);
        }
    }
}

#[test]
fn test_shapes_match_conventional_tetrominoes() {
    let conventional: [(PieceKind, &[&str]); 7] = [
        (PieceKind::I, &["####"]),
        (PieceKind::O, &["##", "##"]),
        (PieceKind::T, &[".#.", "###"]),
        (PieceKind::S, &[".##", "##."]),
        (PieceKind::Z, &["##.", ".##"]),
        (PieceKind::J, &["#..", "###"]),
        (PieceKind::L, &["..#", "###"]),
    ];

    for (kind, rows) in conventional {
        let mut expected = Vec::new();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch == '#' {
                    expected.push((r as i16, c as i16));
                }
            }
        }
        expected.sort_unstable();
        assert_eq!(normalized(&spawn_shape(kind)), expected, "{:?}", kind);
    }
}

#[test]
fn test_spawn_shapes_are_all_different() {
    let all: HashSet<_> = PieceKind::ALL
        .iter()
        .map(|&k| normalized(&spawn_shape(k)))
        .collect();
    assert_eq!(all.len(), 7);
}

// ============== Rotation Tests ==============

#[test]
fn test_pivot_rotation_keeps_pivot_in_place() {
    for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
        let shape = spawn_shape(kind);
        let rotated = rotate_cw_about(&shape, 1);
        assert_eq!(rotated[1], shape[1], "{:?}", kind);
    }
}

#[test]
fn test_pivot_rotation_is_a_clockwise_quarter_turn() {
    for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
        let shape = spawn_shape(kind);
        let rotated = RotationRule::for_kind(kind).apply(&shape);
        // Second orientation in the clockwise sequence.
        assert_eq!(normalized(&rotated), orientations(&shape)[1], "{:?}", kind);
    }
}

#[test]
fn test_four_rotations_restore_every_shape() {
    for kind in PieceKind::ALL {
        let shape = spawn_shape(kind);
        let rule = RotationRule::for_kind(kind);
        let mut current = shape;
        for _ in 0..4 {
            current = rule.apply(&current);
        }
        assert_eq!(current, shape, "{:?}", kind);
    }
}

#[test]
fn test_j_rotation_hand_computed() {
    let j = spawn_shape(PieceKind::J);
    // Pivot (1,0): the corner above it swings to its right, the arm hangs below.
    assert_eq!(rotate_cw_about(&j, 1), [(1, 1), (1, 0), (2, 0), (3, 0)]);
}

#[test]
fn test_line_flip_round_trip() {
    let i = spawn_shape(PieceKind::I);
    let vertical = flip_axis(&i);
    assert!(vertical.iter().all(|&(_, c)| c == 0));
    assert_eq!(flip_axis(&vertical), i);
}

#[test]
fn test_square_rule_is_fixed() {
    let o = spawn_shape(PieceKind::O);
    assert_eq!(RotationRule::for_kind(PieceKind::O).apply(&o), o);
}

#[test]
fn test_piece_rotated_keeps_origin() {
    let piece = Piece::spawn(PieceKind::Z, 10).translated(5, 1);
    let rotated = piece.rotated();
    assert_eq!((rotated.row, rotated.col), (piece.row, piece.col));
    assert_ne!(rotated.shape, piece.shape);
}

#[test]
fn test_spawn_column_follows_width() {
    assert_eq!(Piece::spawn(PieceKind::I, 10).col, 3);
    assert_eq!(Piece::spawn(PieceKind::I, 12).col, 4);
    assert_eq!(Piece::spawn(PieceKind::I, 7).col, 1);
    assert_eq!(Piece::spawn(PieceKind::I, 2).col, -1);
    assert_eq!(Piece::spawn(PieceKind::I, u16::MAX).col, i16::MAX - 2);
}
