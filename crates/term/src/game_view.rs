//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom:
//! - the grid, one terminal row per board row, walls included
//! - a blank line and the instruction legend
//! - the last turn's message, if any
//! - the prompt, or `GAME OVER!` once the game has ended

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer};

/// Heading printed above the legend.
pub const HELP_TITLE: &str = "Quick play instructions:";

/// Instruction legend shown under the board, one entry per line.
pub const HELP_LINES: [&str; 6] = [
    " - a (return): move piece left",
    " - d (return): move piece right",
    " - w (return): rotate piece counter clockwise",
    " - s (return): rotate piece clockwise",
    " - <space> (return): just move the piece downwards as is",
    " - q (return): to quit the game anytime",
];

pub const PROMPT: &str = "Your move:";

pub const GAME_OVER: &str = "GAME OVER!";

/// A lightweight text renderer for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    show_help: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 1,
            show_help: true,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            ..Self::default()
        }
    }

    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Render one turn into an existing framebuffer, resizing it to fit.
    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        let side = snap.grid.side() as u16;
        let board_w = side * self.cell_w;

        let mut lines: Vec<(&str, CellStyle)> = Vec::with_capacity(12);
        if self.show_help {
            lines.push(("", CellStyle::PLAIN));
            lines.push((HELP_TITLE, CellStyle::PLAIN));
            lines.push(("", CellStyle::PLAIN));
            let dim = CellStyle {
                dim: true,
                ..CellStyle::PLAIN
            };
            lines.extend(HELP_LINES.iter().map(|l| (*l, dim)));
        }
        if let Some(message) = snap.message.as_deref() {
            let bold = CellStyle {
                bold: true,
                ..CellStyle::PLAIN
            };
            lines.push((message, bold));
        }
        let footer = if snap.game_over { GAME_OVER } else { PROMPT };
        lines.push((footer, CellStyle::PLAIN));

        let text_w = lines
            .iter()
            .map(|(l, _)| l.chars().count() as u16)
            .max()
            .unwrap_or(0);
        fb.resize(board_w.max(text_w), side + lines.len() as u16);

        for (y, row) in snap.grid.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let px = x as u16 * self.cell_w;
                for dx in 0..self.cell_w {
                    fb.put_char(px + dx, y as u16, cell.glyph(), CellStyle::PLAIN);
                }
            }
        }

        for (i, (text, style)) in lines.iter().enumerate() {
            fb.put_str(0, side + i as u16, text, *style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot) -> FrameBuffer {
        let mut fb = FrameBuffer::new(0, 0);
        self.render_into(snap, &mut fb);
        fb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Piece, Position};
    use crate::types::PieceKind;

    fn snapshot(message: Option<&str>, game_over: bool) -> GameSnapshot {
        let board = Board::new(4);
        GameSnapshot {
            grid: board.render_snapshot(&Piece::new(PieceKind::O), Position::new(0, 2)),
            message: message.map(str::to_string),
            game_over,
            pieces_spawned: 1,
            lines_cleared: 0,
        }
    }

    #[test]
    fn grid_rows_come_first() {
        let fb = GameView::default().render(&snapshot(None, false));
        assert_eq!(fb.row_text(0), "* ** *");
        assert_eq!(fb.row_text(1), "* ** *");
        assert_eq!(fb.row_text(2), "*    *");
        assert_eq!(fb.row_text(5), "******");
    }

    #[test]
    fn prompt_is_last_line() {
        let fb = GameView::default().render(&snapshot(None, false));
        assert_eq!(fb.row_text(fb.height() - 1), PROMPT);
        assert_eq!(fb.row_text(7), HELP_TITLE);
    }

    #[test]
    fn message_sits_above_prompt_in_bold() {
        let fb = GameView::default().render(&snapshot(Some("Cannot move left!"), false));
        let y = fb.height() - 2;
        assert_eq!(fb.row_text(y), "Cannot move left!");
        assert!(fb.get(0, y).unwrap().style.bold);
    }

    #[test]
    fn game_over_replaces_prompt() {
        let fb = GameView::default().render(&snapshot(None, true));
        assert_eq!(fb.row_text(fb.height() - 1), GAME_OVER);
    }

    #[test]
    fn wide_cells_and_no_help() {
        let fb = GameView::new(2).with_help(false).render(&snapshot(None, false));
        assert_eq!(fb.height(), 7);
        assert_eq!(fb.row_text(0), "**  ****  **");
        assert_eq!(fb.row_text(6), PROMPT);
    }
}
