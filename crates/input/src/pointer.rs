//! Mouse events to grid cells.

use crate::types::{Command, GridCell};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Where the board's top-left cell is drawn and how big each cell is, in
/// terminal columns/rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerMapper {
    pub origin_x: u16,
    pub origin_y: u16,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl PointerMapper {
    pub fn new(origin_x: u16, origin_y: u16, cell_w: u16, cell_h: u16) -> Self {
        Self {
            origin_x,
            origin_y,
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Grid cell under a screen position. Positions left of or above the
    /// board map to negative cells; the engine rejects them.
    pub fn to_cell(&self, px: u16, py: u16) -> GridCell {
        let dx = i32::from(px) - i32::from(self.origin_x);
        let dy = i32::from(py) - i32::from(self.origin_y);
        GridCell::new(
            dx.div_euclid(i32::from(self.cell_w.max(1))),
            dy.div_euclid(i32::from(self.cell_h.max(1))),
        )
    }
}

/// Left button press/drag/release become grab/drag/release.
pub fn handle_mouse_event(event: MouseEvent, mapper: &PointerMapper) -> Option<Command> {
    let cell = mapper.to_cell(event.column, event.row);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Command::Grab(cell)),
        MouseEventKind::Drag(MouseButton::Left) => Some(Command::DragTo(cell)),
        MouseEventKind::Up(MouseButton::Left) => Some(Command::Release),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_to_cell_with_wide_cells() {
        let m = PointerMapper::new(4, 2, 2, 1);
        assert_eq!(m.to_cell(4, 2), GridCell::new(0, 0));
        assert_eq!(m.to_cell(5, 2), GridCell::new(0, 0));
        assert_eq!(m.to_cell(6, 3), GridCell::new(1, 1));
        assert_eq!(m.to_cell(3, 1), GridCell::new(-1, -1));
        assert_eq!(m.to_cell(0, 0), GridCell::new(-2, -2));
    }

    #[test]
    fn test_zero_cell_size_is_raised() {
        let m = PointerMapper::new(0, 0, 0, 0);
        assert_eq!((m.cell_w, m.cell_h), (1, 1));
        assert_eq!(m.to_cell(3, 4), GridCell::new(3, 4));
    }

    #[test]
    fn test_left_button_maps_to_drag_protocol() {
        let m = PointerMapper::new(0, 0, 2, 1);
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 6, 1), &m),
            Some(Command::Grab(GridCell::new(3, 1)))
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 9, 5), &m),
            Some(Command::DragTo(GridCell::new(4, 5)))
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0), &m),
            Some(Command::Release)
        );
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let m = PointerMapper::new(0, 0, 2, 1);
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1), &m),
            None
        );
        assert_eq!(handle_mouse_event(mouse(MouseEventKind::Moved, 1, 1), &m), None);
        assert_eq!(handle_mouse_event(mouse(MouseEventKind::ScrollUp, 1, 1), &m), None);
    }
}
