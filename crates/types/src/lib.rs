//! Core types module - shared data structures and constants
//!
//! This crate defines the plain types used throughout the workspace. They have
//! no external dependencies, so the core rules, the line-input parser and the
//! terminal view can all agree on them.
//!
//! # Board Geometry
//!
//! The playfield is square. A board of interior size `n` is stored as an
//! `(n + 2) x (n + 2)` grid ("effective size"):
//!
//! - column `0` and column `n + 1` are permanent walls
//! - row `n + 1` is the permanent floor
//! - row `0` is open (apart from its two wall cells) so pieces can enter
//!
//! Coordinates are `(row, col)` with row `0` at the top.
//!
//! # Examples
//!
//! ```
//! use turn_tetris_types::{effective_size, Cell, PieceKind, DEFAULT_BOARD_SIZE};
//!
//! assert_eq!(effective_size(DEFAULT_BOARD_SIZE), 14);
//!
//! assert_eq!(PieceKind::S.as_str(), "s");
//! assert_eq!(Cell::Filled.glyph(), '*');
//! ```

/// Interior board size used when nothing else is configured.
pub const DEFAULT_BOARD_SIZE: usize = 12;

/// Smallest interior size that still fits every piece in every orientation.
pub const MIN_BOARD_SIZE: usize = 4;

/// Largest interior size accepted by configuration.
pub const MAX_BOARD_SIZE: usize = 64;

/// Row index where new pieces enter the board.
pub const SPAWN_ROW: i32 = 0;

/// Side length of the stored grid for a given interior size (walls included).
pub const fn effective_size(board_size: usize) -> usize {
    board_size + 2
}

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    pub fn is_filled(self) -> bool {
        self == Cell::Filled
    }

    /// Logical OR of two cells.
    pub fn or(self, other: Cell) -> Cell {
        if self.is_filled() || other.is_filled() {
            Cell::Filled
        } else {
            Cell::Empty
        }
    }

    /// Character used on the terminal for this cell.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Filled => '*',
        }
    }
}

/// The five piece kinds in catalog order.
///
/// This is not the full tetromino set: there is no T and no Z.
/// - **I**: 4x1 vertical bar
/// - **J**: 3x2, foot to the right
/// - **L**: 3x2, foot to the left
/// - **S**: 3x2 vertical S
/// - **O**: 2x2 square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    S,
    O,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 5] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::O,
    ];

    /// Short name used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::S => "s",
            PieceKind::O => "o",
        }
    }
}

/// One player command, decoded from one line of input.
///
/// Every possible line maps to exactly one command; anything unrecognised is
/// [`Command::Invalid`]. Decoding lives in the input crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Shift the piece one column left (`a`)
    MoveLeft,
    /// Shift the piece one column right (`d`)
    MoveRight,
    /// Rotate the piece 90° counter-clockwise (`w`)
    RotateCcw,
    /// Rotate the piece 90° clockwise (`s`)
    RotateCw,
    /// Leave the piece as is and let it drop one row (a single space)
    NoOp,
    /// Leave the game (`q`)
    Quit,
    /// Anything else
    Invalid,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::RotateCcw => "rotateCcw",
            Command::RotateCw => "rotateCw",
            Command::NoOp => "noOp",
            Command::Quit => "quit",
            Command::Invalid => "invalid",
        }
    }
}

/// Result of feeding one command to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The game is still running; render and ask for the next command.
    Continue,
    /// The player asked to leave. Nothing was changed.
    Quit,
    /// The game has ended. Further commands are ignored.
    GameOver,
}
