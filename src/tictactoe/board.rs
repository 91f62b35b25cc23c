//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::types::StateKey;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// The nine cells of a board, indexed 0-8 left-to-right, top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl BoardState {
    /// Create a new empty board
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
        }
    }

    fn count_pieces(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Parse a board from its nine-character key.
    ///
    /// Accepts `.` or a space for empty cells and `X`/`O` in either case.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The key is not exactly nine characters
    /// - Any character is not a valid cell representation
    /// - The mark counts differ by more than one
    pub fn from_key(key: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = key.chars().collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: key.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: key.to_string(),
            })?;
        }

        let count = Self::count_pieces(&cells);
        if count.x.abs_diff(count.o) > 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(BoardState { cells })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is on the board and empty
    pub fn is_empty(&self, pos: usize) -> bool {
        pos < 9 && self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions, ascending
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Put `player`'s mark on an empty cell. Returns false if the cell is
    /// taken or off the board.
    pub(crate) fn place(&mut self, pos: usize, player: Player) -> bool {
        if !self.is_empty(pos) {
            return false;
        }
        self.cells[pos] = player.to_cell();
        true
    }

    /// Legal moves in this position (empty cells when the game is not over)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = Self::count_pieces(&self.cells);
        count.x + count.o
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Nine-character encoding, e.g. `X...O....`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// Value-table key for this board
    pub fn key(&self) -> StateKey {
        StateKey::from_encoded(self.encode())
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                " {} | {} | {}",
                chunk[0].to_char(),
                chunk[1].to_char(),
                chunk[2].to_char()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = BoardState::new();
        assert_eq!(board.empty_positions(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.occupied_count(), 0);
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_encode_round_trip() {
        let board = BoardState::from_key("XO..X...O").unwrap();
        assert_eq!(board.encode(), "XO..X...O");
        assert_eq!(BoardState::from_key(&board.encode()).unwrap(), board);
    }

    #[test]
    fn test_place_rejects_occupied_and_out_of_range() {
        let mut board = BoardState::new();
        assert!(board.place(4, Player::X));
        assert!(!board.place(4, Player::O));
        assert!(!board.place(9, Player::O));
        assert_eq!(board.get(4), Cell::X);
    }

    #[test]
    fn test_legal_moves_empty_after_win() {
        let board = BoardState::from_key("XXXOO....").unwrap();
        assert_eq!(board.winner(), Some(Player::X));
        assert!(board.legal_moves().is_empty());
        assert_eq!(board.empty_positions(), vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X
        // X O O
        // O X X
        let board = BoardState::from_key("XOXXOOOXX").unwrap();
        assert!(board.is_draw());
        assert_eq!(board.winner(), None);
        assert!(board.is_terminal());
    }

    #[test]
    fn test_display_renders_rows() {
        let board = BoardState::from_key("X...O....").unwrap();
        assert_eq!(board.to_string(), " X | . | .\n . | O | .\n . | . | .");
    }
}
