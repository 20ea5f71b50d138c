//! Game state module - the turn-based state machine
//!
//! One command in, one step out. Each turn:
//! 1. the command is checked for legality against the permanent grid and
//!    committed or rejected with a message
//! 2. an accepted move (or a no-op) is followed by a forced one-row descent
//! 3. a piece that cannot descend any further is merged into the board, full
//!    rows are cleared and a new piece is spawned
//!
//! The game ends when a piece locks on the spawn row, or when a fresh piece
//! cannot enter the grid.

use thiserror::Error;
use tracing::{debug, info, trace};

use crate::board::Board;
use crate::pieces::{
    can_move_down, can_move_left, can_move_right, can_rotate_ccw, can_rotate_cw, overlaps,
    random_piece, random_spawn_position, rotate_ccw, rotate_cw, translate, Piece, Position,
};
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::{Command, TurnOutcome, MAX_BOARD_SIZE, MIN_BOARD_SIZE, SPAWN_ROW};

/// A turn that was refused. Shown to the player, never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("Cannot move left!")]
    BlockedLeft,
    #[error("Cannot move right!")]
    BlockedRight,
    #[error("Cannot rotate anti-clockwise!")]
    BlockedRotateCcw,
    #[error("Cannot rotate clockwise!")]
    BlockedRotateCw,
    #[error("That is not a valid move!")]
    InvalidCommand,
}

/// Errors creating a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("board size {size} is below the minimum of {min}")]
    BoardTooSmall { size: usize, min: usize },
    #[error("board size {size} is above the maximum of {max}")]
    BoardTooLarge { size: usize, max: usize },
    #[error("piece {piece:?} does not fit at {position:?}")]
    PieceDoesNotFit { piece: Piece, position: Position },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    GameOver,
}

/// The falling piece and where it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub piece: Piece,
    pub position: Position,
}

impl ActivePiece {
    pub fn new(piece: Piece, position: Position) -> Self {
        Self { piece, position }
    }

    /// True if the piece has something directly beneath it
    pub fn is_grounded(&self, board: &Board) -> bool {
        !can_move_down(board.grid(), &self.piece, self.position)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SimpleRng> {
    board: Board,
    active: ActivePiece,
    rng: R,
    phase: Phase,
    last_error: Option<TurnError>,
    /// Pieces that have entered the board, the current one included
    pieces_spawned: u32,
    lines_cleared: u32,
}

impl<R: RandomSource> GameState<R> {
    /// New game on an empty board with a random first piece
    pub fn new(board_size: usize, mut rng: R) -> Result<Self, GameError> {
        if board_size < MIN_BOARD_SIZE {
            return Err(GameError::BoardTooSmall {
                size: board_size,
                min: MIN_BOARD_SIZE,
            });
        }
        check_max_size(board_size)?;
        let board = Board::new(board_size);
        let piece = random_piece(&mut rng);
        let position = random_spawn_position(&piece, board.eff_size(), &mut rng).ok_or(
            GameError::PieceDoesNotFit {
                piece,
                position: Position::new(SPAWN_ROW, 1),
            },
        )?;
        Self::from_parts(board, ActivePiece::new(piece, position), rng)
    }

    /// Resume from a prepared board and falling piece
    ///
    /// The board may be no larger than `MAX_BOARD_SIZE` and the piece must
    /// not overlap it. The piece may already be unable to descend, in which
    /// case the game is over from the start.
    pub fn from_parts(board: Board, active: ActivePiece, rng: R) -> Result<Self, GameError> {
        check_max_size(board.size())?;
        if overlaps(board.grid(), &active.piece, active.position) {
            return Err(GameError::PieceDoesNotFit {
                piece: active.piece,
                position: active.position,
            });
        }
        let mut state = Self {
            board,
            active,
            rng,
            phase: Phase::Active,
            last_error: None,
            pieces_spawned: 1,
            lines_cleared: 0,
        };
        state.check_entry();
        Ok(state)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn last_error(&self) -> Option<TurnError> {
        self.last_error
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self
                .board
                .render_snapshot(&self.active.piece, self.active.position),
            message: self.last_error.map(|e| e.to_string()),
            game_over: self.game_over(),
            pieces_spawned: self.pieces_spawned,
            lines_cleared: self.lines_cleared,
        }
    }

    /// Play one turn
    pub fn apply_command(&mut self, command: Command) -> TurnOutcome {
        if self.game_over() {
            return TurnOutcome::GameOver;
        }

        let ActivePiece { piece, position } = self.active;
        let grid = self.board.grid();

        let turn = match command {
            Command::MoveLeft => {
                let legal = can_move_left(grid, &piece, position);
                self.commit(
                    legal,
                    ActivePiece::new(piece, translate(position, 0, -1)),
                    TurnError::BlockedLeft,
                )
            }
            Command::MoveRight => {
                let legal = can_move_right(grid, &piece, position);
                self.commit(
                    legal,
                    ActivePiece::new(piece, translate(position, 0, 1)),
                    TurnError::BlockedRight,
                )
            }
            Command::RotateCcw => {
                let legal = can_rotate_ccw(grid, &piece, position);
                self.commit(
                    legal,
                    ActivePiece::new(rotate_ccw(&piece), position),
                    TurnError::BlockedRotateCcw,
                )
            }
            Command::RotateCw => {
                let legal = can_rotate_cw(grid, &piece, position);
                self.commit(
                    legal,
                    ActivePiece::new(rotate_cw(&piece), position),
                    TurnError::BlockedRotateCw,
                )
            }
            Command::NoOp => Ok(()),
            Command::Invalid => Err(TurnError::InvalidCommand),
            Command::Quit => {
                info!(pieces = self.pieces_spawned, lines = self.lines_cleared, "quit requested");
                return TurnOutcome::Quit;
            }
        };

        self.last_error = turn.err();
        if let Some(error) = self.last_error {
            trace!(command = command.as_str(), %error, "turn rejected");
        }

        // Every accepted turn also drops the piece one row
        if turn.is_ok() && !self.active.is_grounded(&self.board) {
            self.active.position = translate(self.active.position, 1, 0);
        }

        if self.active.is_grounded(&self.board) {
            self.lock_piece();
        }

        if self.game_over() {
            TurnOutcome::GameOver
        } else {
            TurnOutcome::Continue
        }
    }

    fn commit(
        &mut self,
        legal: bool,
        candidate: ActivePiece,
        rejection: TurnError,
    ) -> Result<(), TurnError> {
        if !legal {
            return Err(rejection);
        }
        self.active = candidate;
        Ok(())
    }

    /// Merge the active piece into the board and bring in the next one
    fn lock_piece(&mut self) {
        let ActivePiece { piece, position } = self.active;
        let cleared = self.board.merge_and_clear(&piece, position);
        self.lines_cleared += cleared as u32;
        debug!(kind = piece.kind().as_str(), row = position.row, col = position.col, "piece locked");
        if cleared > 0 {
            info!(cleared, total = self.lines_cleared, "rows cleared");
        }

        if position.row == SPAWN_ROW {
            self.end_game("piece locked on the spawn row");
            return;
        }

        self.spawn_piece();
    }

    /// Draw a new piece at a random spawn column
    fn spawn_piece(&mut self) {
        let piece = random_piece(&mut self.rng);
        let Some(position) = random_spawn_position(&piece, self.board.eff_size(), &mut self.rng)
        else {
            self.end_game("no room to spawn");
            return;
        };
        self.active = ActivePiece::new(piece, position);
        self.pieces_spawned += 1;
        debug!(kind = piece.kind().as_str(), col = position.col, "piece spawned");
        self.check_entry();
    }

    /// A fresh piece that is already stuck means the board is full
    fn check_entry(&mut self) {
        let ActivePiece { piece, position } = self.active;
        if position.row == SPAWN_ROW
            && (overlaps(self.board.grid(), &piece, position) || self.active.is_grounded(&self.board))
        {
            self.end_game("new piece cannot enter the board");
        }
    }

    fn end_game(&mut self, reason: &str) {
        self.phase = Phase::GameOver;
        info!(
            reason,
            pieces = self.pieces_spawned,
            lines = self.lines_cleared,
            "game over"
        );
    }
}

fn check_max_size(size: usize) -> Result<(), GameError> {
    if size > MAX_BOARD_SIZE {
        return Err(GameError::BoardTooLarge {
            size,
            max: MAX_BOARD_SIZE,
        });
    }
    Ok(())
}
