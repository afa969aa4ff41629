//! Board tests - placement, locking and row clearing through the facade

use blockfall::core::shape::{I_SHAPE, O_SHAPE, T_SHAPE};
use blockfall::core::Board;
use blockfall::types::Color;

const GRAY: Color = Color::new(128, 128, 128);

#[test]
fn test_board_new_empty() {
    let board = Board::new(25, 15);
    assert_eq!(board.rows(), 25);
    assert_eq!(board.cols(), 15);
    assert_eq!(board.cells().len(), 25 * 15);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(10, 5);
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(5, 0), None);
    assert_eq!(board.get(0, 10), None);
    assert_eq!(board.get(4, 9), Some(None));
}

#[test]
fn test_rows_above_the_top_are_open() {
    let board = Board::new(10, 5);
    // Cells with y < 0 only need a legal column.
    assert!(board.can_place(&I_SHAPE, 0, -1));
    assert!(!board.can_place(&I_SHAPE, 2, -1));
    assert!(!board.can_place(&O_SHAPE, -1, -3));
}

#[test]
fn test_can_place_bounds_and_overlap() {
    let board = Board::from_ascii(10, 5, &["", "", "", "", "", "", "", "", "", "..#.."], GRAY);
    assert!(board.can_place(&O_SHAPE, 0, 8));
    assert!(board.can_place(&O_SHAPE, 3, 8));
    assert!(!board.can_place(&O_SHAPE, 1, 8));
    assert!(!board.can_place(&O_SHAPE, 4, 0));
    assert!(!board.can_place(&O_SHAPE, 0, 9));
}

#[test]
fn test_lock_skips_hidden_cells() {
    let mut board = Board::new(10, 5);
    let written = board.lock(&T_SHAPE, 0, -1, GRAY);
    // Only the bottom row of the T is on the board.
    assert_eq!(written, 3);
    assert_eq!(board.filled_count(), 3);
    assert_eq!(board.get(1, 0), Some(Some(GRAY)));
}

#[test]
fn test_clear_removes_exactly_the_full_rows() {
    let mut board = Board::from_ascii(
        6,
        4,
        &["#...", "####", ".#..", "####", "..#.", "####"],
        GRAY,
    );

    assert_eq!(board.clear_full_rows(), 3);
    let expected = Board::from_ascii(6, 4, &["", "", "", "#...", ".#..", "..#."], GRAY);
    assert_eq!(board, expected);
}

#[test]
fn test_clear_on_board_without_full_rows_is_identity() {
    let mut board = Board::from_ascii(4, 4, &["#...", "###.", ".###", "#.#."], GRAY);
    let before = board.clone();
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_whole_board() {
    let mut board = Board::from_ascii(3, 2, &["##", "##", "##"], GRAY);
    assert_eq!(board.clear_full_rows(), 3);
    assert_eq!(board.filled_count(), 0);
}
