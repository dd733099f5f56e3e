//! Cell count invariant: one square per coordinate.

use super::Invariant;
use crate::Board;
use tracing::{instrument, warn};

/// Invariant: a board of size n stores exactly n² squares.
pub struct CellCountInvariant;

impl Invariant<Board> for CellCountInvariant {
    const NAME: &'static str = "Board stores exactly size² squares";

    #[instrument(skip(board))]
    fn holds(board: &Board) -> bool {
        let expected = board.size() * board.size();
        let actual = board.squares().len();
        let valid = expected == actual;
        if !valid {
            warn!(expected, actual, "Cell count invariant violated");
        }
        valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_for_every_size() {
        for size in 1..=6 {
            let board = Board::new(size).unwrap();
            assert!(CellCountInvariant::holds(&board));
        }
    }
}
