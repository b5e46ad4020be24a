//! Human player reading moves from a line-based console.

use super::Player;
use crate::console::ui;
use crate::games::noughts::{Board, Marker, Position};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// Human player typing square numbers 1-9.
///
/// Invalid input never ends the game: the player is told what went wrong
/// and asked again. Only end of input is an error.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Consumes the player, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line; bytes that are not UTF-8 become replacement characters.
    fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Failed to read move")?;
        if read == 0 {
            anyhow::bail!("Input closed before a move was entered");
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn get_move(&mut self, board: &Board, marker: Marker) -> Result<Position> {
        loop {
            write!(self.output, "{}", ui::move_prompt(marker))?;
            self.output.flush()?;

            let line = self.read_line()?;
            let Some(position) = Position::parse_number(&line) else {
                warn!(input = line.trim(), "Rejected move outside 1-9");
                writeln!(self.output, "{}", ui::OUT_OF_RANGE)?;
                continue;
            };

            if !board.is_empty(position) {
                warn!(square = position.number(), "Rejected move on occupied square");
                writeln!(self.output, "{}", ui::SQUARE_OCCUPIED)?;
                continue;
            }

            debug!(square = position.number(), "Human chose square");
            return Ok(position);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
