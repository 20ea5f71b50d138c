//! Turn-based terminal Tetris (workspace facade crate).
//!
//! The game logic, line input and terminal rendering live in dedicated crates
//! under `crates/`; this package re-exports them as
//! `turn_tetris::{core,input,term,types}` and adds the runtime [`config`].

pub mod config;

pub use turn_tetris_core as core;
pub use turn_tetris_input as input;
pub use turn_tetris_term as term;
pub use turn_tetris_types as types;
