//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules that do not depend on turn order: the board and
//! its collision queries, tetromino matrices, the rotation rules, the active
//! piece value, random generation and configuration. The session that drives
//! them lives in `blockfall-engine`.
//!
//! # Module Structure
//!
//! - [`board`]: `rows x cols` grid with collision queries, locking and line clearing
//! - [`shape`]: tetromino matrices and plain clockwise rotation
//! - [`rotation`]: rotation rules (S nudge vs. standard) and their kick lists
//! - [`piece`]: the active piece and its interaction state
//! - [`rng`]: seeded uniform shape/color generator
//! - [`config`]: pixel-based board configuration loaded from JSON
//! - [`snapshot`]: read-only state handed to renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{shape::O_SHAPE, Board};
//! use blockfall_core::types::Color;
//!
//! let mut board = Board::new(10, 5);
//! assert!(board.can_place(&O_SHAPE, 1, 8));
//! assert!(!board.can_place(&O_SHAPE, 1, 9));
//!
//! board.lock(&O_SHAPE, 1, 8, Color::new(255, 0, 0));
//! assert_eq!(board.filled_count(), 4);
//! assert_eq!(board.clear_full_rows(), 0);
//! ```

pub mod board;
pub mod config;
pub mod piece;
pub mod rng;
pub mod rotation;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, EngineConfig};
pub use piece::{Grip, Interaction, Piece};
pub use rng::{PieceGenerator, SimpleRng};
pub use rotation::{try_rotate, Rotated, RotationRule};
pub use shape::{Shape, ShapeKind};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
