//! Engine - the turn-taking controller over board and piece
//!
//! [`GameSession`] owns the board, the active piece, the score and the
//! game-over flag. External drivers call exactly one operation per event
//! (timer tick, key press, pointer event) and get back an [`Outcome`]:
//!
//! - [`GameSession::move_piece`], [`GameSession::rotate`], [`GameSession::hard_drop`]
//! - [`GameSession::begin_drag`], [`GameSession::drag_to`], [`GameSession::end_drag`]
//! - [`GameSession::tick`] for gravity, [`GameSession::reset`] to start over
//! - [`GameSession::apply`] dispatching a [`Command`](crate::types::Command)
//!
//! # Example
//!
//! ```
//! use blockfall_engine::core::{EngineConfig, ShapeKind};
//! use blockfall_engine::types::{Direction, GridCell};
//! use blockfall_engine::{GameSession, Outcome};
//!
//! let mut game = GameSession::new(EngineConfig::with_grid(10, 5)).unwrap();
//! game.spawn_kind(ShapeKind::O);
//! assert_eq!(game.active_origin(), Some(GridCell::new(1, 0)));
//!
//! assert_eq!(game.move_piece(Direction::Left), Outcome::Moved(GridCell::new(0, 0)));
//! assert_eq!(game.move_piece(Direction::Left), Outcome::Unchanged);
//!
//! let out = game.hard_drop();
//! assert_eq!(out.lines_cleared(), 0);
//! assert!(game.board().is_occupied(0, 9));
//! ```

pub mod command;
pub mod drag;
pub mod outcome;
pub mod session;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use outcome::{LockReport, Outcome};
pub use session::GameSession;
