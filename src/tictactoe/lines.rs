//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First line fully occupied by `player`, in [`WINNING_LINES`] order
    pub fn winning_line(cells: &[Cell; 9], player: Player) -> Option<[usize; 3]> {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .find(|line| line.iter().all(|&idx| cells[idx] == target))
            .copied()
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        Self::winning_line(cells, player).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(line: [usize; 3], cell: Cell) -> [Cell; 9] {
        let mut cells = [Cell::Empty; 9];
        for idx in line {
            cells[idx] = cell;
        }
        cells
    }

    #[test]
    fn test_every_line_wins_for_its_mark_only() {
        for line in WINNING_LINES {
            let x_cells = filled(line, Cell::X);
            assert!(LineAnalyzer::has_won(&x_cells, Player::X), "{line:?}");
            assert!(!LineAnalyzer::has_won(&x_cells, Player::O), "{line:?}");

            let o_cells = filled(line, Cell::O);
            assert!(LineAnalyzer::has_won(&o_cells, Player::O), "{line:?}");
            assert!(!LineAnalyzer::has_won(&o_cells, Player::X), "{line:?}");
        }
    }

    #[test]
    fn test_winning_line_reports_triple() {
        let cells = filled([2, 4, 6], Cell::O);
        assert_eq!(LineAnalyzer::winning_line(&cells, Player::O), Some([2, 4, 6]));
        assert_eq!(LineAnalyzer::winning_line(&cells, Player::X), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::O;
        cells[2] = Cell::X;

        assert!(!LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }
}
