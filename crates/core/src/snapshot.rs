use serde::Serialize;

use crate::piece::Piece;
use crate::shape::Shape;
use crate::types::{Cell, Color, GridCell, InteractionState, PieceSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
    pub color: Color,
    pub state: InteractionState,
}

impl ActiveSnapshot {
    /// Absolute cells occupied by the piece
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.shape
            .offsets()
            .map(move |(dx, dy)| GridCell::new(self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            shape: value.shape,
            x: value.x,
            y: value.y,
            color: value.color,
            state: value.state(),
        }
    }
}

/// Read-only view of a session handed to renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub rows: u16,
    pub cols: u16,
    /// Row-major board cells (`y * cols + x`)
    pub cells: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub is_over: bool,
    pub paused: bool,
    pub tick_interval_ms: u32,
    pub piece_set: PieceSet,
}

impl GameSnapshot {
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 || x >= self.cols as i32 || y >= self.rows as i32 {
            return None;
        }
        self.cells
            .get(y as usize * self.cols as usize + x as usize)
            .copied()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
            active: None,
            score: 0,
            is_over: false,
            paused: false,
            tick_interval_ms: 0,
            piece_set: PieceSet::default(),
        }
    }
}
