//! Board module - manages the game grid
//!
//! The board is a `rows x cols` grid where each cell is empty or filled with a color.
//! Uses a flat row-major array (`y * cols + x`) sized once at construction.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Rows above the top (negative y) are open space: never blocked, never stored.

use crate::shape::Shape;
use crate::types::{Cell, Color};

/// The game board using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u16,
    cols: u16,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Zero dimensions are raised to 1.
    pub fn new(rows: u16, cols: u16) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            cells: vec![None; rows as usize * cols as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.cols as i32 || y < 0 || y >= self.rows as i32 {
            return None;
        }
        Some((y as usize) * (self.cols as usize) + (x as usize))
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Collision query for a single cell.
    ///
    /// Blocked when outside the side walls, at or below the floor, or filled.
    /// Anything above the top row is free.
    pub fn is_cell_blocked(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.cols as i32 || y >= self.rows as i32 {
            return true;
        }
        y >= 0 && self.is_occupied(x, y)
    }

    /// Whether every occupied cell of `shape` is free with its origin at (x, y)
    pub fn can_place(&self, shape: &Shape, x: i32, y: i32) -> bool {
        shape
            .offsets()
            .all(|(dx, dy)| !self.is_cell_blocked(x.saturating_add(dx), y.saturating_add(dy)))
    }

    /// Merge `shape` into the board with its origin at (x, y).
    ///
    /// Cells above the top row are dropped. Returns the number of cells written.
    pub fn lock(&mut self, shape: &Shape, x: i32, y: i32, color: Color) -> usize {
        let mut written = 0;
        for (dx, dy) in shape.offsets() {
            let py = y.saturating_add(dy);
            if py < 0 {
                continue;
            }
            if self.set(x.saturating_add(dx), py, Some(color)) {
                written += 1;
            }
        }
        written
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.rows as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Cells of row `y`. Panics if `y >= rows`.
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = self.cols as usize;
        let start = y * width;
        &self.cells[start..start + width]
    }

    /// Remove all full rows and return how many were removed.
    ///
    /// Two-pointer compaction from the bottom: each surviving row is copied down
    /// to the next write slot, then the vacated rows at the top are emptied.
    /// With no full rows nothing is written.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.cols as usize;
        let mut write_y = self.rows as usize;
        let mut cleared = 0;

        // Scan from bottom to top
        for read_y in (0..self.rows as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(None);

        cleared
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Parse a board from text rows: `.` is empty, anything else is filled with `color`.
    ///
    /// Short rows are padded with empty cells; rows beyond `rows` and
    /// characters beyond `cols` are ignored. Meant for scripted setups.
    pub fn from_ascii(rows: u16, cols: u16, lines: &[&str], color: Color) -> Self {
        let mut board = Self::new(rows, cols);
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                if ch != '.' && ch != ' ' {
                    board.set(x as i32, y as i32, Some(color));
                }
            }
        }
        board
    }
}
