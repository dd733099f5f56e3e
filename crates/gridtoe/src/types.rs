//! Core domain types for n-by-n tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Marker placed by a player.
///
/// Marks are opaque beyond equality; `X` moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    /// Returns true for an empty square.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

impl From<Mark> for Square {
    fn from(mark: Mark) -> Self {
        Square::Occupied(mark)
    }
}

/// A board coordinate, 1-based.
///
/// `column` runs left to right and `row` top to bottom, so the top-left
/// square is `(1, 1)` and the bottom-right square of an n×n board is `(n, n)`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Coord {
    /// Column (x), starting at 1.
    pub column: usize,
    /// Row (y), starting at 1.
    pub row: usize,
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_mark_display() {
        assert_eq!(Mark::X.to_string(), "X");
        assert_eq!(Mark::O.to_string(), "O");
    }

    #[test]
    fn test_coord_display() {
        assert_eq!(Coord::new(3, 1).to_string(), "(3, 1)");
    }

    #[test]
    fn test_square_mark() {
        assert_eq!(Square::Empty.mark(), None);
        assert_eq!(Square::from(Mark::O).mark(), Some(Mark::O));
        assert!(Square::Empty.is_empty());
    }
}
