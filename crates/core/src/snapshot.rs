use crate::board::Grid;

/// Everything a view needs to draw one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Permanent grid with the falling piece overlaid
    pub grid: Grid,
    /// Message from the last turn (rejected move or bad input)
    pub message: Option<String>,
    pub game_over: bool,
    pub pieces_spawned: u32,
    pub lines_cleared: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
