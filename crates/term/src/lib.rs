//! Terminal front end for the falling-block game.
//!
//! A small game-oriented rendering layer: the [`GameView`] draws a
//! [`core::GameSnapshot`] into a [`FrameBuffer`], and the [`TerminalRenderer`]
//! flushes the frame to the terminal as a diff against the previous one.
//! Nothing here mutates game state.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{BoardLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
