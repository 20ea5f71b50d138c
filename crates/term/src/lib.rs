//! Terminal rendering for the turn-based game.
//!
//! Rendering is split in two:
//! - [`GameView`] turns a [`core::GameSnapshot`] into a [`FrameBuffer`] (pure, testable)
//! - [`TerminalRenderer`] clears the screen and writes the framebuffer out
//!
//! The terminal is left in normal line mode so moves can be typed and
//! confirmed with return.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use turn_tetris_core as core;
pub use turn_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, GAME_OVER, HELP_LINES, HELP_TITLE, PROMPT};
pub use renderer::{encode_full_into, TerminalRenderer};
