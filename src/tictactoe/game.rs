//! Mutable game engine driving a single episode

use super::board::{BoardState, Player};
use crate::types::StateKey;

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// Engine state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Drawn,
}

impl GameStatus {
    pub fn outcome(self) -> Option<GameOutcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(GameOutcome::Win(player)),
            GameStatus::Drawn => Some(GameOutcome::Draw),
        }
    }
}

/// A single game on one board.
///
/// Once the status leaves [`GameStatus::InProgress`] no further moves are
/// accepted until [`Game::reset`].
#[derive(Debug, Clone)]
pub struct Game {
    board: BoardState,
    status: GameStatus,
}

impl Game {
    /// Create a new game on an empty board
    pub fn new() -> Self {
        Game {
            board: BoardState::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Place `player`'s mark at `position`.
    ///
    /// Returns false, leaving the game untouched, if the position is
    /// occupied or off the board, or if the game is already over. Turn order
    /// is the caller's responsibility.
    pub fn make_move(&mut self, position: usize, player: Player) -> bool {
        if self.is_over() || !self.board.place(position, player) {
            return false;
        }
        self.check_winner(player);
        true
    }

    fn check_winner(&mut self, player: Player) {
        if self.board.has_won(player) {
            self.status = GameStatus::Won(player);
        } else if self.board.is_full() {
            self.status = GameStatus::Drawn;
        }
    }

    /// Empty cell indices, ascending
    pub fn available_moves(&self) -> Vec<usize> {
        self.board.empty_positions()
    }

    /// Return to the empty board
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.status.outcome()
    }

    /// Value-table key of the current board
    pub fn state_key(&self) -> StateKey {
        self.board.key()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
