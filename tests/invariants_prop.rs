//! Property tests over generated command streams and boards.
//!
//! Invariants covered:
//! - Every locked cell and every on-board cell of the active piece is inside
//!   the columns and above the floor.
//! - The active piece never overlaps a locked cell.
//! - Score never decreases and grows by exactly 10 per cleared row.
//! - Clearing removes exactly the full rows, keeps the order of the rest and
//!   leaves a board without full rows untouched.
//! - After game over nothing but reset changes the session.

use blockfall::core::{Board, EngineConfig};
use blockfall::engine::{GameSession, Outcome};
use blockfall::types::{Color, Command, GridCell, PieceSet, POINTS_PER_LINE};
use proptest::prelude::*;

const GRAY: Color = Color::new(128, 128, 128);

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => Just(Command::MoveLeft),
        4 => Just(Command::MoveRight),
        6 => Just(Command::MoveDown),
        4 => Just(Command::Rotate),
        2 => Just(Command::HardDrop),
        2 => (-2i32..10, -2i32..14).prop_map(|(x, y)| Command::Grab(GridCell::new(x, y))),
        3 => (-3i32..11, -3i32..16).prop_map(|(x, y)| Command::DragTo(GridCell::new(x, y))),
        2 => Just(Command::Release),
    ]
}

fn assert_session_consistent(s: &GameSession) -> Result<(), TestCaseError> {
    let board = s.board();
    let (rows, cols) = (board.rows() as i32, board.cols() as i32);

    for (i, cell) in board.cells().iter().enumerate() {
        if cell.is_some() {
            let (x, y) = ((i as i32) % cols, (i as i32) / cols);
            prop_assert!(x >= 0 && x < cols && y >= 0 && y < rows);
        }
    }

    if let Some(piece) = s.active() {
        prop_assert!(!s.is_over());
        for c in piece.cells() {
            prop_assert!(c.x >= 0 && c.x < cols, "column out of range: {:?}", c);
            prop_assert!(c.y < rows, "below the floor: {:?}", c);
            prop_assert!(!board.is_occupied(c.x, c.y), "overlap at {:?}", c);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn generated_play_respects_core_invariants(
        seed in any::<u32>(),
        seven in any::<bool>(),
        rows in 6u16..14,
        cols in 4u16..10,
        commands in prop::collection::vec(command_strategy(), 1..300),
    ) {
        let set = if seven { PieceSet::Standard7 } else { PieceSet::Classic5 };
        let config = EngineConfig::with_grid(rows, cols).with_seed(seed).with_piece_set(set);
        let mut s = GameSession::new(config).unwrap();
        s.start();
        assert_session_consistent(&s)?;

        for command in commands {
            let score_before = s.score();
            let was_over = s.is_over();
            let board_before = s.board().clone();
            let active_before = s.active();

            let out = s.apply(command);

            prop_assert!(s.score() >= score_before);
            match out {
                Outcome::Locked(report) => {
                    prop_assert_eq!(s.score() - score_before, POINTS_PER_LINE * report.lines_cleared);
                    prop_assert_eq!(report.game_over, s.is_over());
                }
                _ => {
                    prop_assert_eq!(s.score(), score_before);
                }
            }

            if was_over {
                prop_assert_eq!(out, Outcome::Unchanged);
                prop_assert_eq!(s.board(), &board_before);
                prop_assert_eq!(s.active(), active_before);
            }

            assert_session_consistent(&s)?;
        }
    }

    #[test]
    fn clearing_removes_exactly_full_rows(
        rows in prop::collection::vec(prop::collection::vec(any::<bool>(), 6), 1..16),
        full in prop::collection::vec(any::<bool>(), 16),
    ) {
        let height = rows.len();
        let mut board = Board::new(height as u16, 6);
        let mut survivors = Vec::new();
        let mut expected_cleared = 0;

        for (y, pattern) in rows.iter().enumerate() {
            let solid = full[y] || pattern.iter().all(|&b| b);
            for (x, &bit) in pattern.iter().enumerate() {
                if solid || bit {
                    board.set(x as i32, y as i32, Some(GRAY));
                }
            }
            if solid {
                expected_cleared += 1;
            } else {
                survivors.push(board.row(y).to_vec());
            }
        }

        let before = board.clone();
        let cleared = board.clear_full_rows();
        prop_assert_eq!(cleared, expected_cleared);

        for y in 0..cleared {
            prop_assert!(board.row(y).iter().all(|c| c.is_none()));
        }
        for (i, row) in survivors.iter().enumerate() {
            prop_assert_eq!(board.row(cleared + i), row.as_slice());
        }

        if expected_cleared == 0 {
            prop_assert_eq!(&board, &before);
        }

        // A second pass finds nothing left to clear.
        let settled = board.clone();
        prop_assert_eq!(board.clear_full_rows(), 0);
        prop_assert_eq!(board, settled);
    }
}
