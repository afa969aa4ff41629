//! Pointer drag from screen coordinates down to the engine

use blockfall::core::{Board, EngineConfig, ShapeKind};
use blockfall::engine::{GameSession, Outcome};
use blockfall::input::{handle_mouse_event, PointerMapper};
use blockfall::types::{Color, Command, GridCell, InteractionState};
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn session(rows: u16, cols: u16) -> GameSession {
    GameSession::new(EngineConfig::with_grid(rows, cols).with_seed(4)).unwrap()
}

#[test]
fn test_mouse_drag_moves_piece_and_release_locks_on_floor() {
    let mut s = session(10, 5);
    s.spawn_kind(ShapeKind::O); // cells (1..=2, 0..=1)
    // Board drawn at column 10, row 3 with 2x1 cells.
    let mapper = PointerMapper::new(10, 3, 2, 1);

    let down = handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 13, 3), &mapper);
    assert_eq!(down, Some(Command::Grab(GridCell::new(1, 0))));
    assert_eq!(s.apply(down.unwrap()), Outcome::Grabbed);
    assert_eq!(s.interaction_state(), Some(InteractionState::Held));

    // Drag the grabbed cell to grid (3, 8): origin lands at (3, 8).
    let drag = handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 16, 11), &mapper);
    assert_eq!(s.apply(drag.unwrap()), Outcome::Moved(GridCell::new(3, 8)));

    let up = handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 16, 11), &mapper);
    let out = s.apply(up.unwrap());
    let report = out.lock_report().expect("resting piece locks on release");
    assert_eq!((report.settled.x, report.settled.y), (3, 8));
    assert!(s.board().is_occupied(4, 9));
}

#[test]
fn test_drag_off_board_is_ignored() {
    let mut s = session(10, 5);
    s.spawn_kind(ShapeKind::O);
    s.begin_drag(GridCell::new(1, 0));

    assert_eq!(s.drag_to(GridCell::new(-3, 0)), Outcome::Unchanged);
    assert_eq!(s.drag_to(GridCell::new(40, 2)), Outcome::Unchanged);
    assert_eq!(s.drag_to(GridCell::new(1, 9)), Outcome::Unchanged);
    assert_eq!(s.active_origin(), Some(GridCell::new(1, 0)));
}

#[test]
fn test_release_mid_air_resumes_falling() {
    let mut s = session(10, 5);
    s.spawn_kind(ShapeKind::O);
    s.begin_drag(GridCell::new(2, 1));
    assert_eq!(s.drag_to(GridCell::new(1, 4)), Outcome::Moved(GridCell::new(0, 3)));
    assert_eq!(s.end_drag(), Outcome::Released);

    assert_eq!(s.interaction_state(), Some(InteractionState::Falling));
    assert_eq!(s.tick(), Outcome::Moved(GridCell::new(0, 4)));
}

#[test]
fn test_release_onto_locked_stack_locks() {
    let board = Board::from_ascii(10, 5, &["", "", "", "", "", "", "####."], Color::new(9, 9, 9));
    let mut s = session(10, 5).with_board(board);
    s.spawn_kind(ShapeKind::O);
    s.begin_drag(GridCell::new(1, 0));
    // O resting on row 6 has its origin at row 4.
    assert_eq!(s.drag_to(GridCell::new(2, 4)), Outcome::Moved(GridCell::new(2, 4)));
    assert!(matches!(s.end_drag(), Outcome::Locked(_)));
    assert!(s.board().is_occupied(2, 5));
}

#[test]
fn test_drag_to_extreme_row_then_hard_drop_still_locks() {
    let mut s = session(10, 5);
    s.spawn_kind(ShapeKind::O);
    assert_eq!(s.begin_drag(GridCell::new(1, 0)), Outcome::Grabbed);
    assert_eq!(
        s.drag_to(GridCell::new(1, i32::MIN + 4)),
        Outcome::Moved(GridCell::new(1, -2))
    );

    // Released with no cell on the board: back to the grab position.
    assert_eq!(s.end_drag(), Outcome::Released);
    assert_eq!(s.active_origin(), Some(GridCell::new(1, 0)));
    assert_eq!(s.board().filled_count(), 0);

    let outcome = s.hard_drop();
    let report = outcome.lock_report().expect("hard drop locks");
    assert_eq!(report.settled.y, 8);
    assert!(s.board().is_occupied(1, 9));
}
