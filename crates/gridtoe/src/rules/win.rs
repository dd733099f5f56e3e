//! Win detection logic.

use crate::{Board, Mark};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if the mark fills a row, column or main diagonal,
/// `None` otherwise. X is checked before O.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    Mark::iter().find(|&mark| board.wins(mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coord;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new(3).unwrap();
        for column in 1..=3 {
            board.place(Coord::new(column, 1), Mark::X).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_column_on_5x5() {
        let mut board = Board::new(5).unwrap();
        for row in 1..=5 {
            board.place(Coord::new(4, row), Mark::O).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new(3).unwrap();
        board.place(Coord::new(1, 1), Mark::X).unwrap();
        board.place(Coord::new(2, 2), Mark::X).unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
