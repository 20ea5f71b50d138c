//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the turn-based falling-block game. It has
//! **no dependencies** on terminal I/O, so every rule can be driven from tests:
//!
//! - **Deterministic**: the same seed (or scripted [`RandomSource`]) replays the same game
//! - **Turn-based**: the board advances exactly one step per command, never on a timer
//!
//! # Module Structure
//!
//! - [`board`]: walled square grid, piece overlay, merge and line clearing
//! - [`pieces`]: the five-shape catalog, rotation, translation and legality checks
//! - [`rng`]: the [`RandomSource`] seam plus a seeded LCG and an entropy-backed source
//! - [`game_state`]: the per-turn state machine
//! - [`snapshot`]: what a view needs to draw one turn
//!
//! # Game Rules
//!
//! - A board of size `n` is an `(n + 2)`-wide square: walls left and right, floor below,
//!   open at the top
//! - Pieces spawn on row 0 in a random column
//! - An accepted move, rotation or no-op is followed by a one-row drop
//! - A rejected move does nothing but report why
//! - A piece that cannot drop is merged; complete rows are removed
//! - The game ends when a piece locks on row 0 or a new piece cannot enter
//!
//! # Example
//!
//! ```
//! use turn_tetris_core::{GameState, SimpleRng};
//! use turn_tetris_types::{Command, TurnOutcome};
//!
//! let mut game = GameState::new(12, SimpleRng::new(12345)).unwrap();
//!
//! assert_eq!(game.apply_command(Command::NoOp), TurnOutcome::Continue);
//! assert_eq!(game.active().position.row, 1);
//!
//! assert_eq!(game.apply_command(Command::Quit), TurnOutcome::Quit);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use turn_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, Grid};
pub use game_state::{ActivePiece, GameError, GameState, Phase, TurnError};
pub use pieces::{Piece, Position};
pub use rng::{OsRandom, RandomSource, SimpleRng};
pub use snapshot::GameSnapshot;
