//! Blocking line reader.

use std::io::BufRead;

use anyhow::{Context, Result};
use tracing::{info, trace};

use crate::map::map_line;
use crate::types::Command;

/// Reads one command per line from any buffered source.
pub struct LineInput<R> {
    source: R,
    line: String,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            line: String::with_capacity(16),
        }
    }

    /// Block until the next line arrives and decode it.
    ///
    /// End of input is reported as [`Command::Quit`].
    pub fn next_command(&mut self) -> Result<Command> {
        self.line.clear();
        let read = self
            .source
            .read_line(&mut self.line)
            .context("failed to read a move from input")?;
        if read == 0 {
            info!("input closed, quitting");
            return Ok(Command::Quit);
        }
        let command = map_line(&self.line);
        trace!(line = ?self.line, command = command.as_str(), "input");
        Ok(command)
    }
}
