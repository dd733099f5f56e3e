//! The n×n playing grid.

use super::{BoardError, Coord, Mark, Square};
use tracing::{instrument, trace};

/// n×n tic-tac-toe board.
///
/// Squares are stored densely in row-major order, so every coordinate in
/// `[1, size]²` always has exactly one square. Cloning copies the storage;
/// a clone can be mutated without touching the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Squares in row-major order, `(row - 1) * size + (column - 1)`.
    squares: Vec<Square>,
}

impl Board {
    /// Largest supported side length.
    ///
    /// Storage grows with the square of the size and move selection with a
    /// much higher power, so larger boards are refused up front.
    pub const MAX_SIZE: usize = 100;

    /// Creates an empty board of the given size.
    ///
    /// The size must lie in `1..=Board::MAX_SIZE`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(1..=Self::MAX_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self {
            size,
            squares: vec![Square::Empty; size * size],
        })
    }

    /// Returns the side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        (1..=self.size).contains(&coord.column) && (1..=self.size).contains(&coord.row)
    }

    fn offset(&self, coord: Coord) -> Result<usize, BoardError> {
        if self.contains(coord) {
            Ok((coord.row - 1) * self.size + (coord.column - 1))
        } else {
            Err(BoardError::OutOfRange {
                coord,
                size: self.size,
            })
        }
    }

    fn coord_at(&self, offset: usize) -> Coord {
        Coord::new(offset % self.size + 1, offset / self.size + 1)
    }

    /// Gets the square at the given coordinate.
    pub fn get(&self, coord: Coord) -> Result<Square, BoardError> {
        let offset = self.offset(coord)?;
        Ok(self.squares[offset])
    }

    /// Checks if a square is occupied by either mark.
    pub fn is_occupied(&self, coord: Coord) -> Result<bool, BoardError> {
        Ok(!self.get(coord)?.is_empty())
    }

    /// Places a mark at the given coordinate.
    ///
    /// Returns `Ok(false)` without touching the board if the square is
    /// already taken; the caller is expected to pick another coordinate.
    #[instrument(level = "trace", skip(self))]
    pub fn place(&mut self, coord: Coord, mark: Mark) -> Result<bool, BoardError> {
        let offset = self.offset(coord)?;
        if !self.squares[offset].is_empty() {
            trace!(%coord, "Square already used");
            return Ok(false);
        }
        self.squares[offset] = Square::Occupied(mark);
        Ok(true)
    }

    /// Empties every square.
    pub fn clear(&mut self) {
        self.squares.fill(Square::Empty);
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|square| !square.is_empty())
    }

    /// Returns the coordinates holding the given square value, row by row.
    pub fn cells_with(&self, square: Square) -> Vec<Coord> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == square)
            .map(|(offset, _)| self.coord_at(offset))
            .collect()
    }

    /// Returns the empty coordinates, row by row.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells_with(Square::Empty)
    }

    /// Counts the squares holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Checks if the mark fills a whole row, column or main diagonal.
    #[instrument(level = "trace", skip(self))]
    pub fn wins(&self, mark: Mark) -> bool {
        let owned = self.cells_with(Square::Occupied(mark));
        if owned.len() < self.size {
            return false;
        }

        let mut per_column = vec![0usize; self.size];
        let mut per_row = vec![0usize; self.size];
        for coord in &owned {
            per_column[coord.column - 1] += 1;
            per_row[coord.row - 1] += 1;
        }
        if per_column.contains(&self.size) || per_row.contains(&self.size) {
            return true;
        }

        let n = self.size;
        let owns = |i: usize, j: usize| {
            self.squares[(j - 1) * n + (i - 1)] == Square::Occupied(mark)
        };
        (1..=n).all(|i| owns(i, i)) || (1..=n).all(|i| owns(i, n - i + 1))
    }

    /// Returns the corner coordinates without duplicates.
    ///
    /// A 1×1 board has a single corner.
    pub fn corners(&self) -> Vec<Coord> {
        let n = self.size;
        let mut corners = vec![
            Coord::new(1, 1),
            Coord::new(1, n),
            Coord::new(n, 1),
            Coord::new(n, n),
        ];
        corners.sort();
        corners.dedup();
        corners
    }

    /// Returns the center coordinates.
    ///
    /// Odd boards have one center square; even boards have the four squares
    /// of the central 2×2 block.
    pub fn center(&self) -> Vec<Coord> {
        let n = self.size;
        if n % 2 == 0 {
            let half = n / 2;
            vec![
                Coord::new(half, half),
                Coord::new(half, half + 1),
                Coord::new(half + 1, half + 1),
                Coord::new(half + 1, half),
            ]
        } else {
            let mid = n.div_ceil(2);
            vec![Coord::new(mid, mid)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn c(column: usize, row: usize) -> Coord {
        Coord::new(column, row)
    }

    fn board_with(size: usize, mark: Mark, coords: &[(usize, usize)]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &(column, row) in coords {
            assert!(board.place(c(column, row), mark).unwrap());
        }
        board
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Board::new(0), Err(BoardError::InvalidSize(0)));
    }

    #[test]
    fn test_oversized_board_rejected() {
        assert!(Board::new(Board::MAX_SIZE).is_ok());
        let too_big = Board::MAX_SIZE + 1;
        assert_eq!(Board::new(too_big), Err(BoardError::InvalidSize(too_big)));
        assert_eq!(
            Board::new(1_000_000),
            Err(BoardError::InvalidSize(1_000_000))
        );
        assert_eq!(Board::new(usize::MAX), Err(BoardError::InvalidSize(usize::MAX)));
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3).unwrap();
        assert_eq!(board.empty_cells().len(), 9);
        assert!(!board.is_full());
        for mark in Mark::iter() {
            assert!(!board.wins(mark));
        }
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::new(2).unwrap();
        assert_eq!(board.empty_cells(), vec![c(1, 1), c(2, 1), c(1, 2), c(2, 2)]);
    }

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new(3).unwrap();
        assert_eq!(board.place(c(2, 3), Mark::X), Ok(true));
        assert_eq!(board.get(c(2, 3)), Ok(Square::Occupied(Mark::X)));
        assert_eq!(board.is_occupied(c(2, 3)), Ok(true));
        assert_eq!(board.is_occupied(c(3, 2)), Ok(false));
    }

    #[test]
    fn test_place_occupied_does_not_mutate() {
        let mut board = Board::new(3).unwrap();
        board.place(c(1, 1), Mark::X).unwrap();
        let before = board.clone();
        assert_eq!(board.place(c(1, 1), Mark::O), Ok(false));
        assert_eq!(board, before);
        assert_eq!(board.get(c(1, 1)), Ok(Square::Occupied(Mark::X)));
    }

    #[test]
    fn test_out_of_range() {
        let mut board = Board::new(3).unwrap();
        for coord in [c(0, 1), c(1, 0), c(4, 1), c(1, 4)] {
            assert_eq!(
                board.get(coord),
                Err(BoardError::OutOfRange { coord, size: 3 })
            );
            assert!(board.place(coord, Mark::X).is_err());
        }
    }

    #[test]
    fn test_wins_every_line_3x3() {
        let lines: [[(usize, usize); 3]; 8] = [
            [(1, 1), (2, 1), (3, 1)],
            [(1, 2), (2, 2), (3, 2)],
            [(1, 3), (2, 3), (3, 3)],
            [(1, 1), (1, 2), (1, 3)],
            [(2, 1), (2, 2), (2, 3)],
            [(3, 1), (3, 2), (3, 3)],
            [(1, 1), (2, 2), (3, 3)],
            [(1, 3), (2, 2), (3, 1)],
        ];
        for line in lines {
            let board = board_with(3, Mark::O, &line);
            assert!(board.wins(Mark::O), "line {:?} should win", line);
            assert!(!board.wins(Mark::X));
        }
    }

    #[test]
    fn test_no_win_for_non_lines() {
        let board = board_with(3, Mark::X, &[(1, 1), (2, 1), (1, 2), (3, 3)]);
        assert!(!board.wins(Mark::X));
        let board = board_with(3, Mark::X, &[(1, 1), (2, 2), (3, 2)]);
        assert!(!board.wins(Mark::X));
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = board_with(3, Mark::X, &[(1, 1), (2, 1)]);
        board.place(c(3, 1), Mark::O).unwrap();
        assert!(!board.wins(Mark::X));
        assert!(!board.wins(Mark::O));
    }

    #[test]
    fn test_single_cell_board() {
        let mut board = Board::new(1).unwrap();
        assert!(!board.wins(Mark::X));
        board.place(c(1, 1), Mark::X).unwrap();
        assert!(board.wins(Mark::X));
        assert!(!board.wins(Mark::O));
        assert!(board.is_full());
    }

    #[test]
    fn test_wins_4x4_anti_diagonal() {
        let board = board_with(4, Mark::X, &[(1, 4), (2, 3), (3, 2), (4, 1)]);
        assert!(board.wins(Mark::X));
        let board = board_with(4, Mark::X, &[(1, 4), (2, 3), (3, 2)]);
        assert!(!board.wins(Mark::X));
    }

    #[test]
    fn test_wins_is_idempotent() {
        let board = board_with(3, Mark::X, &[(1, 1), (2, 2), (3, 3)]);
        assert_eq!(board.wins(Mark::X), board.wins(Mark::X));
        assert!(board.wins(Mark::X));
    }

    #[test]
    fn test_corners() {
        let board = Board::new(3).unwrap();
        assert_eq!(board.corners(), vec![c(1, 1), c(1, 3), c(3, 1), c(3, 3)]);
        let board = Board::new(1).unwrap();
        assert_eq!(board.corners(), vec![c(1, 1)]);
    }

    #[test]
    fn test_center() {
        assert_eq!(Board::new(3).unwrap().center(), vec![c(2, 2)]);
        assert_eq!(Board::new(5).unwrap().center(), vec![c(3, 3)]);
        assert_eq!(
            Board::new(4).unwrap().center(),
            vec![c(2, 2), c(2, 3), c(3, 3), c(3, 2)]
        );
        assert_eq!(Board::new(1).unwrap().center(), vec![c(1, 1)]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = board_with(3, Mark::X, &[(1, 1)]);
        let mut copy = original.clone();
        assert_eq!(original, copy);

        copy.place(c(2, 2), Mark::O).unwrap();
        assert_eq!(original.get(c(2, 2)), Ok(Square::Empty));

        original.place(c(3, 3), Mark::X).unwrap();
        assert_eq!(copy.get(c(3, 3)), Ok(Square::Empty));
    }

    #[test]
    fn test_count() {
        let mut board = board_with(3, Mark::X, &[(1, 1), (2, 1)]);
        board.place(c(3, 3), Mark::O).unwrap();
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 1);
    }
}
