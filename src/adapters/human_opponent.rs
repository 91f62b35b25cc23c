//! Human opponent reading moves from a text prompt

use std::io::{BufRead, Write};

use crate::{Result, error::Error, ports::Opponent, tictactoe::Game};

pub const PROMPT: &str = "Enter position to play (0-8): ";
pub const INVALID_INPUT: &str = "Invalid input. Please enter a number from 0 to 8.";
pub const INVALID_POSITION: &str = "Invalid position. Please choose an empty position.";

/// Prompts for a cell index until a legal one is entered.
///
/// The board is shown before each prompt. Non-numeric input and occupied or
/// out-of-range cells are reported and re-prompted; only end of input stops
/// the loop.
pub struct HumanOpponent<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanOpponent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(|source| Error::Io {
            operation: "read move from input".to_string(),
            source,
        })?;
        if read == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Opponent for HumanOpponent<R, W> {
    fn select_move(&mut self, game: &Game) -> Result<usize> {
        writeln!(self.output, "Current board:")?;
        writeln!(self.output, "{}", game.board())?;

        let available = game.available_moves();
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let line = self.read_line()?;
            match line.trim().parse::<usize>() {
                Ok(position) if available.contains(&position) => return Ok(position),
                Ok(_) => writeln!(self.output, "{INVALID_POSITION}")?,
                Err(_) => writeln!(self.output, "{INVALID_INPUT}")?,
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}
