//! Rotation module - clockwise rotation with a small, rule-specific kick list
//!
//! This is not SRS. Two rules exist:
//!
//! - [`RotationRule::SNudge`]: the spawn-orientation S rotates into an explicit
//!   3-row target matrix and may be nudged one row down if the target is blocked.
//! - [`RotationRule::Standard`]: everything else uses the plain transpose-and-reverse
//!   and tries the current position, one column right, then one row down.
//!
//! When no candidate fits the rotation is rejected and the caller keeps its
//! shape and origin.

use crate::shape::{Shape, MAX_DIM, S_SHAPE};

/// Kick offset `(dx, dy)` applied to the origin
pub type Kick = (i32, i32);

const STANDARD_KICKS: [Kick; 3] = [(0, 0), (1, 0), (0, 1)];

const S_NUDGE_KICKS: [Kick; 2] = [(0, 0), (0, 1)];

/// Rotation behavior selected from the current matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationRule {
    Standard,
    SNudge,
}

impl RotationRule {
    /// Pick the rule for a matrix. Only an exact match of the spawn S selects `SNudge`.
    pub fn for_shape(shape: &Shape) -> Self {
        if *shape == S_SHAPE {
            RotationRule::SNudge
        } else {
            RotationRule::Standard
        }
    }

    /// The rotated matrix under this rule
    pub fn rotate(self, shape: &Shape) -> Shape {
        match self {
            RotationRule::Standard => shape.rotated_cw(),
            RotationRule::SNudge => s_target(shape),
        }
    }

    /// Origin offsets to try, in order
    pub fn kicks(self) -> &'static [Kick] {
        match self {
            RotationRule::Standard => &STANDARD_KICKS,
            RotationRule::SNudge => &S_NUDGE_KICKS,
        }
    }
}

/// Target matrix for the S rule: two columns built from the top-left 2x2 of
/// the source plus the fixed `[0, 1]` bottom row.
fn s_target(s: &Shape) -> Shape {
    let mut bits = [[0u8; MAX_DIM]; MAX_DIM];
    bits[0][0] = s.at(1, 0);
    bits[0][1] = s.at(0, 0);
    bits[1][0] = s.at(1, 1);
    bits[1][1] = s.at(0, 1);
    bits[2][1] = 1;
    Shape::new(3, 2, bits)
}

/// Successful rotation: the new matrix and the kick that made it fit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotated {
    pub shape: Shape,
    pub kick: Kick,
}

/// Try to rotate `shape` sitting at (x, y).
///
/// `can_place(shape, x, y)` is the placement query, usually
/// [`Board::can_place`](crate::Board::can_place).
/// Returns None if every kick is blocked.
pub fn try_rotate(
    shape: &Shape,
    x: i32,
    y: i32,
    can_place: impl Fn(&Shape, i32, i32) -> bool,
) -> Option<Rotated> {
    let rule = RotationRule::for_shape(shape);
    let new_shape = rule.rotate(shape);

    rule.kicks()
        .iter()
        .copied()
        .find(|&(dx, dy)| can_place(&new_shape, x.saturating_add(dx), y.saturating_add(dy)))
        .map(|kick| Rotated {
            shape: new_shape,
            kick,
        })
}
