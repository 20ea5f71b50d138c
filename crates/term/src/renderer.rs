//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every turn is a full redraw: clear the screen, home the cursor, print each
//! framebuffer row. The terminal stays in cooked mode so the player's input
//! line is echoed as typed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, SetAttribute},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    clear_screen: bool,
}

impl<W: Write> TerminalRenderer<W> {
    /// Render into any writer. With `clear_screen` off, frames are simply
    /// appended one after another.
    pub fn with_writer(out: W, clear_screen: bool) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
            clear_screen,
        }
    }

    /// Draw a full frame.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        if self.clear_screen {
            self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
            self.buf.queue(cursor::MoveTo(0, 0))?;
        }
        encode_full_into(fb, &mut self.buf)?;
        self.flush_buf()
    }

    /// Print a single line below whatever is on screen.
    pub fn print_line(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(text))?;
        self.buf.queue(Print("\n"))?;
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode every framebuffer row into `out`, one line each.
///
/// Trailing blanks are dropped. This builds a sequence of crossterm commands
/// without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style = CellStyle::PLAIN;
    for y in 0..fb.height() {
        let len = fb.row_text(y).chars().count() as u16;
        for x in 0..len {
            let cell = fb.get(x, y).unwrap_or_default();
            if cell.style != current_style {
                apply_style_into(out, cell.style)?;
                current_style = cell.style;
            }
            out.queue(Print(cell.ch))?;
        }
        if current_style != CellStyle::PLAIN {
            apply_style_into(out, CellStyle::PLAIN)?;
            current_style = CellStyle::PLAIN;
        }
        out.queue(Print("\n"))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}
