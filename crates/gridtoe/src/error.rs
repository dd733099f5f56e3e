//! Error types for board access, moves and move selection.

use super::{Coord, Mark};

/// Error raised by board construction or coordinate access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Board size must lie in `1..=Board::MAX_SIZE`.
    #[display(
        "Invalid board size {}: size must be between 1 and {}",
        _0,
        crate::Board::MAX_SIZE
    )]
    InvalidSize(usize),

    /// Coordinate lies outside `[1, size]²`.
    #[display("Coordinate {} is outside the {}x{} board", coord, size, size)]
    OutOfRange {
        /// The offending coordinate.
        coord: Coord,
        /// Board size.
        size: usize,
    },
}

impl std::error::Error for BoardError {}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinate lies outside the board.
    #[display("Coordinate {} is outside the {}x{} board", coord, size, size)]
    OutOfRange {
        /// The offending coordinate.
        coord: Coord,
        /// Board size.
        size: usize,
    },

    /// The square at the coordinate is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Coord),

    /// It's not this mark's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Mark),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfRange { coord, size } => MoveError::OutOfRange { coord, size },
            BoardError::InvalidSize(size) => {
                MoveError::InvariantViolation(format!("board has invalid size {}", size))
            }
        }
    }
}

/// Error raised by the computer's move selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HeuristicError {
    /// Move selection was requested on a full board.
    #[display("No empty cells left to choose from")]
    NoEmptyCells,
}

impl std::error::Error for HeuristicError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::OutOfRange {
            coord: Coord::new(4, 1),
            size: 3,
        };
        assert_eq!(err.to_string(), "Coordinate (4, 1) is outside the 3x3 board");
        assert_eq!(
            BoardError::InvalidSize(0).to_string(),
            "Invalid board size 0: size must be between 1 and 100"
        );
    }

    #[test]
    fn test_move_error_from_board_error() {
        let err: MoveError = BoardError::OutOfRange {
            coord: Coord::new(0, 2),
            size: 3,
        }
        .into();
        assert_eq!(
            err,
            MoveError::OutOfRange {
                coord: Coord::new(0, 2),
                size: 3
            }
        );
    }

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::CellOccupied(Coord::new(2, 2)).to_string(),
            "Square (2, 2) is already occupied"
        );
        assert_eq!(MoveError::WrongPlayer(Mark::O).to_string(), "It's not O's turn");
    }
}
