//! Line input module.
//!
//! The game reads one line per turn. This crate turns a line into a
//! [`crate::types::Command`] and wraps any `BufRead` source so the binary can
//! read from a terminal, a pipe or an in-memory script alike.

pub mod map;
pub mod reader;

pub use turn_tetris_types as types;

pub use map::map_line;
pub use reader::LineInput;
