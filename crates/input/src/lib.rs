//! Terminal input mapping (engine-facing).
//!
//! Maps `crossterm` key and mouse events into [`crate::types::Command`].
//! Mouse positions are converted to grid cells by a [`PointerMapper`] that
//! knows where the board is drawn on screen.

pub mod map;
pub mod pointer;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::{handle_mouse_event, PointerMapper};
