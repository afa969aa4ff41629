//! Shape module - tetromino matrices
//!
//! A shape is a small rectangular 0/1 matrix. Row `i`, column `j` maps to the
//! grid cell `(origin.x + j, origin.y + i)`. Matrices for the same tetromino
//! differ only by rotation; there is no separate rotation index.

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::types::PieceSet;

/// Largest matrix dimension (the I piece is 4 long)
pub const MAX_DIM: usize = 4;

/// Rectangular occupancy matrix, stored in a fixed 4x4 array.
///
/// Cells outside `height x width` are always zero so that derived equality
/// compares only the meaningful part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    height: u8,
    width: u8,
    bits: [[u8; MAX_DIM]; MAX_DIM],
}

impl Shape {
    /// Build from a padded 4x4 array. Cells outside `height x width` are dropped.
    pub const fn new(height: u8, width: u8, bits: [[u8; MAX_DIM]; MAX_DIM]) -> Self {
        let mut clean = [[0u8; MAX_DIM]; MAX_DIM];
        let mut i = 0;
        while i < height as usize && i < MAX_DIM {
            let mut j = 0;
            while j < width as usize && j < MAX_DIM {
                clean[i][j] = (bits[i][j] != 0) as u8;
                j += 1;
            }
            i += 1;
        }
        Self {
            height,
            width,
            bits: clean,
        }
    }

    /// Build from ragged rows, padding short rows with zeros.
    ///
    /// Returns `None` for an empty matrix or one larger than 4x4.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        if height == 0 || width == 0 || height > MAX_DIM || width > MAX_DIM {
            return None;
        }
        let mut bits = [[0u8; MAX_DIM]; MAX_DIM];
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                bits[i][j] = v;
            }
        }
        Some(Self::new(height as u8, width as u8, bits))
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Value at row `i`, column `j` (0 outside the matrix).
    pub fn at(&self, i: usize, j: usize) -> u8 {
        if i < self.height() && j < self.width() {
            self.bits[i][j]
        } else {
            0
        }
    }

    pub fn is_filled(&self, i: usize, j: usize) -> bool {
        self.at(i, j) != 0
    }

    /// Row `i` as a slice of exactly `width` values.
    pub fn row(&self, i: usize) -> &[u8] {
        &self.bits[i][..self.width()]
    }

    /// Occupied offsets as `(dx, dy)` = `(column, row)`.
    pub fn offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.height()).flat_map(move |i| {
            (0..self.width())
                .filter(move |&j| self.bits[i][j] != 0)
                .map(move |j| (j as i32, i as i32))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.offsets().count()
    }

    /// Plain 90 degree clockwise rotation: `new[j][i] = old[h-1-i][j]`.
    pub fn rotated_cw(&self) -> Shape {
        let h = self.height();
        let w = self.width();
        let mut bits = [[0u8; MAX_DIM]; MAX_DIM];
        for (j, out_row) in bits.iter_mut().enumerate().take(w) {
            for (i, out) in out_row.iter_mut().enumerate().take(h) {
                *out = self.bits[h - 1 - i][j];
            }
        }
        Shape::new(w as u8, h as u8, bits)
    }
}

impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.height()))?;
        for i in 0..self.height() {
            seq.serialize_element(self.row(i))?;
        }
        seq.end()
    }
}

/// Named tetrominoes in spawn orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    L,
    T,
    S,
    O,
    I,
    Z,
    J,
}

const CLASSIC_5: [ShapeKind; 5] = [ShapeKind::L, ShapeKind::T, ShapeKind::S, ShapeKind::O, ShapeKind::I];

const STANDARD_7: [ShapeKind; 7] = [
    ShapeKind::L,
    ShapeKind::T,
    ShapeKind::S,
    ShapeKind::O,
    ShapeKind::I,
    ShapeKind::Z,
    ShapeKind::J,
];

pub const L_SHAPE: Shape = Shape::new(2, 3, [[1, 0, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
pub const T_SHAPE: Shape = Shape::new(2, 3, [[0, 1, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
pub const S_SHAPE: Shape = Shape::new(2, 3, [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
pub const O_SHAPE: Shape = Shape::new(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
pub const I_SHAPE: Shape = Shape::new(1, 4, [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]]);
pub const Z_SHAPE: Shape = Shape::new(2, 3, [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]]);
pub const J_SHAPE: Shape = Shape::new(2, 3, [[0, 0, 1, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);

impl ShapeKind {
    /// Spawn-orientation matrix
    pub fn shape(self) -> Shape {
        match self {
            ShapeKind::L => L_SHAPE,
            ShapeKind::T => T_SHAPE,
            ShapeKind::S => S_SHAPE,
            ShapeKind::O => O_SHAPE,
            ShapeKind::I => I_SHAPE,
            ShapeKind::Z => Z_SHAPE,
            ShapeKind::J => J_SHAPE,
        }
    }

    /// Shapes drawn by a given piece set, in a fixed order
    pub fn all(set: PieceSet) -> &'static [ShapeKind] {
        match set {
            PieceSet::Classic5 => &CLASSIC_5,
            PieceSet::Standard7 => &STANDARD_7,
        }
    }
}
