//! What an engine operation changed, for the renderer to react to.

use crate::core::ActiveSnapshot;
use crate::types::GridCell;

/// Result of one lock sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockReport {
    /// The piece as it was merged, with state `Settled`
    pub settled: ActiveSnapshot,
    pub lines_cleared: u32,
    /// Points added by this lock
    pub points: u32,
    /// The follow-up spawn failed
    pub game_over: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Rejected or not applicable; nothing changed
    Unchanged,
    /// The active piece now sits at this origin
    Moved(GridCell),
    /// The active piece took its rotated shape at this origin
    Rotated(GridCell),
    /// The pointer took hold of the active piece
    Grabbed,
    /// The pointer let go and the piece is falling again
    Released,
    /// The active piece was merged into the board
    Locked(LockReport),
    /// A new piece became active
    Spawned,
    /// A spawn was blocked; the session is over
    GameOver,
    /// Session-level change (pause, speed, restart)
    Session,
}

impl Outcome {
    /// Whether anything observable changed
    pub fn changed(&self) -> bool {
        !matches!(self, Outcome::Unchanged)
    }

    pub fn lock_report(&self) -> Option<&LockReport> {
        match self {
            Outcome::Locked(report) => Some(report),
            _ => None,
        }
    }

    /// Lines cleared by this operation (0 unless it locked)
    pub fn lines_cleared(&self) -> u32 {
        self.lock_report().map_or(0, |r| r.lines_cleared)
    }

    /// Whether this operation ended the game
    pub fn ended_game(&self) -> bool {
        match self {
            Outcome::GameOver => true,
            Outcome::Locked(report) => report.game_over,
            _ => false,
        }
    }
}
