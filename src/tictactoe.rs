//! Tic-Tac-Toe rules engine

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BoardState, Cell, Player};
pub use game::{Game, GameOutcome, GameStatus};
pub use lines::{LineAnalyzer, WINNING_LINES};
