//! Pointer drag protocol: grab, move, release.
//!
//! Pointer positions arrive as grid cells. A grab only succeeds on one of the
//! piece's occupied cells; while held the piece follows the pointer wherever
//! it fits and ignores gravity and keyboard moves.

use crate::core::{Board, Grip, Interaction, Piece};
use crate::outcome::Outcome;
use crate::session::GameSession;
use crate::types::GridCell;

impl GameSession {
    /// Grab the falling piece at `cell`
    pub fn begin_drag(&mut self, cell: GridCell) -> Outcome {
        if self.is_over() {
            return Outcome::Unchanged;
        }
        let Some(mut piece) = self.active.filter(|p| p.is_falling()) else {
            return Outcome::Unchanged;
        };
        if !piece.contains(cell) {
            return Outcome::Unchanged;
        }

        piece.interaction = Interaction::Held(Grip {
            offset: cell - piece.origin(),
            anchor: piece.origin(),
        });
        self.active = Some(piece);
        Outcome::Grabbed
    }

    /// Move the held piece so the grabbed cell sits under `cell`.
    ///
    /// Positions where the piece does not fit are ignored. The piece can leave
    /// the top edge by at most its own height.
    pub fn drag_to(&mut self, cell: GridCell) -> Outcome {
        if self.is_over() {
            return Outcome::Unchanged;
        }
        let Some(mut piece) = self.active else {
            return Outcome::Unchanged;
        };
        let Some(grip) = piece.grip() else {
            return Outcome::Unchanged;
        };

        let mut candidate = cell - grip.offset;
        candidate.y = candidate.y.max(-(piece.shape.height() as i32));
        if candidate == piece.origin()
            || !self.board().can_place(&piece.shape, candidate.x, candidate.y)
        {
            return Outcome::Unchanged;
        }

        piece.x = candidate.x;
        piece.y = candidate.y;
        self.active = Some(piece);
        Outcome::Moved(candidate)
    }

    /// Let go of the held piece.
    ///
    /// A piece released on top of something locks at once. A piece found in an
    /// invalid position, or with no cell on the board, goes back to where the
    /// drag started.
    pub fn end_drag(&mut self) -> Outcome {
        if self.is_over() {
            return Outcome::Unchanged;
        }
        let Some(mut piece) = self.active else {
            return Outcome::Unchanged;
        };
        let Some(grip) = piece.grip() else {
            return Outcome::Unchanged;
        };

        if !is_on_board(&piece, self.board()) {
            piece.x = grip.anchor.x;
            piece.y = grip.anchor.y;
        }
        piece.interaction = Interaction::Falling;
        self.active = Some(piece);

        if is_on_board(&piece, self.board()) && piece.is_resting(self.board()) {
            return self.lock_active();
        }
        Outcome::Released
    }
}

/// Fits, with at least one cell at or below the top row.
fn is_on_board(piece: &Piece, board: &Board) -> bool {
    piece.fits(board) && piece.cells().iter().any(|c| c.y >= 0)
}
