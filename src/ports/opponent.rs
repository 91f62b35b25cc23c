//! Opponent port - whoever plays against the agent

use crate::{Result, tictactoe::Game};

/// A source of moves for the non-learning side of an episode.
///
/// Implementations include a uniformly random player for training and a
/// human reading moves from a prompt.
pub trait Opponent {
    /// Pick a cell for the current position.
    ///
    /// The returned index must be one of `game.available_moves()`.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be produced (no empty cells, or the
    /// input source is exhausted).
    fn select_move(&mut self, game: &Game) -> Result<usize>;

    /// Get the opponent's name.
    fn name(&self) -> &str;
}
