//! Active piece - shape, origin, color and how it is being driven

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::shape::{Shape, MAX_DIM};
use crate::types::{Color, GridCell, InteractionState};

/// Pointer grip recorded when a piece is grabbed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grip {
    /// Grabbed cell minus the origin at grab time
    pub offset: GridCell,
    /// Origin before the drag started
    pub anchor: GridCell,
}

/// Interaction state with state-specific payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interaction {
    Falling,
    Held(Grip),
}

impl Interaction {
    pub fn state(&self) -> InteractionState {
        match self {
            Interaction::Falling => InteractionState::Falling,
            Interaction::Held(_) => InteractionState::Held,
        }
    }
}

/// The piece that has not yet been merged into the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
    pub color: Color,
    pub interaction: Interaction,
}

impl Piece {
    /// A falling piece horizontally centered on a board `cols` wide, at `y = 0`
    pub fn spawn(shape: Shape, color: Color, cols: u16) -> Self {
        let x = (cols as i32 - shape.width() as i32).div_euclid(2);
        Self {
            shape,
            x,
            y: 0,
            color,
            interaction: Interaction::Falling,
        }
    }

    pub fn origin(&self) -> GridCell {
        GridCell::new(self.x, self.y)
    }

    pub fn state(&self) -> InteractionState {
        self.interaction.state()
    }

    pub fn is_falling(&self) -> bool {
        matches!(self.interaction, Interaction::Falling)
    }

    pub fn grip(&self) -> Option<Grip> {
        match self.interaction {
            Interaction::Held(grip) => Some(grip),
            Interaction::Falling => None,
        }
    }

    /// Absolute grid cells occupied by the piece
    pub fn cells(&self) -> ArrayVec<GridCell, { MAX_DIM * MAX_DIM }> {
        self.shape
            .offsets()
            .map(|(dx, dy)| GridCell::new(self.x.saturating_add(dx), self.y.saturating_add(dy)))
            .collect()
    }

    /// Whether `cell` is one of the occupied cells
    pub fn contains(&self, cell: GridCell) -> bool {
        let dx = cell.x as i64 - self.x as i64;
        let dy = cell.y as i64 - self.y as i64;
        if !(0..MAX_DIM as i64).contains(&dx) || !(0..MAX_DIM as i64).contains(&dy) {
            return false;
        }
        self.shape.is_filled(dy as usize, dx as usize)
    }

    /// Whether the piece fits where it currently is
    pub fn fits(&self, board: &Board) -> bool {
        board.can_place(&self.shape, self.x, self.y)
    }

    /// Whether the piece could fit with its origin offset by (dx, dy)
    pub fn fits_offset(&self, board: &Board, dx: i32, dy: i32) -> bool {
        board.can_place(&self.shape, self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Whether the row below is blocked for at least one cell
    pub fn is_resting(&self, board: &Board) -> bool {
        !self.fits_offset(board, 0, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{I_SHAPE, O_SHAPE, T_SHAPE};

    const BLUE: Color = Color::new(0, 0, 255);

    #[test]
    fn test_spawn_centers_horizontally() {
        // 15 columns: (15 - 3) / 2 = 6, (15 - 2) / 2 = 6, (15 - 4) / 2 = 5
        assert_eq!(Piece::spawn(T_SHAPE, BLUE, 15).x, 6);
        assert_eq!(Piece::spawn(O_SHAPE, BLUE, 15).x, 6);
        assert_eq!(Piece::spawn(I_SHAPE, BLUE, 15).x, 5);
        assert_eq!(Piece::spawn(O_SHAPE, BLUE, 5).x, 1);
        // Wider than the board floors to the left.
        assert_eq!(Piece::spawn(I_SHAPE, BLUE, 1).x, -2);
    }

    #[test]
    fn test_spawn_is_falling_at_top() {
        let p = Piece::spawn(T_SHAPE, BLUE, 10);
        assert_eq!(p.y, 0);
        assert_eq!(p.state(), InteractionState::Falling);
        assert!(p.grip().is_none());
    }

    #[test]
    fn test_cells_and_contains() {
        let p = Piece::spawn(T_SHAPE, BLUE, 10);
        let cells = p.cells();
        assert_eq!(cells.len(), 4);
        for cell in cells.iter() {
            assert!(p.contains(*cell));
        }
        // The empty top-left corner of the T matrix is not part of the piece.
        assert!(!p.contains(p.origin()));
        assert!(!p.contains(GridCell::new(p.x - 1, p.y)));
        assert!(!p.contains(GridCell::new(i32::MIN, i32::MAX)));
    }

    #[test]
    fn test_is_resting_on_floor() {
        let board = Board::new(4, 4);
        let mut p = Piece::spawn(O_SHAPE, BLUE, 4);
        assert!(!p.is_resting(&board));
        p.y = 2;
        assert!(p.fits(&board));
        assert!(p.is_resting(&board));
    }
}
