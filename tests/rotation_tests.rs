//! Rotation through the session: kick order, S nudge and failure no-ops

use blockfall::core::shape::{L_SHAPE, S_SHAPE};
use blockfall::core::{Board, EngineConfig, Shape, ShapeKind};
use blockfall::engine::{GameSession, Outcome};
use blockfall::types::{Color, GridCell};

const GRAY: Color = Color::new(128, 128, 128);

fn session_with(board: Board) -> GameSession {
    GameSession::new(EngineConfig::with_grid(board.rows(), board.cols()).with_seed(1))
        .unwrap()
        .with_board(board)
}

#[test]
fn test_rotation_in_place() {
    let mut s = session_with(Board::new(10, 5));
    s.spawn_kind(ShapeKind::L);
    assert_eq!(s.rotate(), Outcome::Rotated(GridCell::new(1, 0)));
    assert_eq!(s.active().unwrap().shape, L_SHAPE.rotated_cw());
}

#[test]
fn test_rotation_kicks_right_first() {
    // Rotated L at (1, 0) would cover (1, 2).
    let board = Board::from_ascii(10, 5, &["", "", ".#"], GRAY);
    let mut s = session_with(board);
    s.spawn_kind(ShapeKind::L);
    assert_eq!(s.rotate(), Outcome::Rotated(GridCell::new(2, 0)));
}

#[test]
fn test_rotation_kicks_down_when_right_fails() {
    // (2, 0) is the hole in the L's top row; both the in-place and the
    // right-shifted targets need it.
    let board = Board::from_ascii(10, 5, &["..#"], GRAY);
    let mut s = session_with(board);
    s.spawn_kind(ShapeKind::L);
    assert!(s.active().unwrap().fits(s.board()));
    assert_eq!(s.rotate(), Outcome::Rotated(GridCell::new(1, 1)));
}

#[test]
fn test_failed_rotation_keeps_shape_and_origin() {
    let board = Board::from_ascii(10, 5, &["", "", "", "##"], GRAY);
    let mut s = session_with(board);
    s.spawn_kind(ShapeKind::I); // horizontal at (0, 0)
    let before = s.active().unwrap();

    assert_eq!(s.rotate(), Outcome::Unchanged);
    let after = s.active().unwrap();
    assert_eq!(after.shape, before.shape);
    assert_eq!(after.origin(), before.origin());
}

#[test]
fn test_s_piece_nudges_one_row_down() {
    let board = Board::from_ascii(10, 5, &[".#"], GRAY);
    let mut s = session_with(board);
    s.spawn_kind(ShapeKind::S); // (2,0) (3,0) (1,1) (2,1)
    assert_eq!(s.rotate(), Outcome::Rotated(GridCell::new(1, 1)));

    let expected = Shape::from_rows(&[&[1, 0], &[1, 1], &[0, 1]]).unwrap();
    assert_eq!(s.active().unwrap().shape, expected);
}

#[test]
fn test_s_piece_never_kicks_sideways() {
    // A right kick to (2, 0) would fit, but the S only tries the nudge.
    let board = Board::from_ascii(10, 5, &[".#", "", "", "..#"], GRAY);
    let mut s = session_with(board);
    s.spawn_kind(ShapeKind::S);
    assert_eq!(s.rotate(), Outcome::Unchanged);
    assert_eq!(s.active().unwrap().shape, S_SHAPE);
}

#[test]
fn test_s_piece_cycles_back_after_two_turns() {
    let mut s = session_with(Board::new(10, 5));
    s.spawn_kind(ShapeKind::S);
    assert!(s.rotate().changed());
    assert!(s.rotate().changed());
    assert_eq!(s.active().unwrap().shape, S_SHAPE);
}

#[test]
fn test_o_rotation_is_reported_unchanged() {
    let mut s = session_with(Board::new(10, 5));
    s.spawn_kind(ShapeKind::O);
    assert_eq!(s.rotate(), Outcome::Unchanged);
    assert_eq!(s.active_origin(), Some(GridCell::new(1, 0)));
}
