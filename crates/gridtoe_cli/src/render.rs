//! Text rendering of the board.

use gridtoe::{Board, Coord, Square};

const TOP: &str = " ___  ";
const MID: &str = "|   | ";
const LOW: &str = "|___| ";

/// Formats the board as rows of boxes, top-left square first.
///
/// Every board row takes four text lines; an occupied square shows its
/// mark in the third.
pub fn render_board(board: &Board) -> String {
    let n = board.size();
    let mut out = String::new();
    for row in 1..=n {
        out.push_str(&TOP.repeat(n));
        out.push('\n');
        out.push_str(&MID.repeat(n));
        out.push('\n');
        for column in 1..=n {
            match board.get(Coord::new(column, row)).ok().and_then(Square::mark) {
                Some(mark) => out.push_str(&format!("| {} | ", mark)),
                None => out.push_str(MID),
            }
        }
        out.push('\n');
        out.push_str(&LOW.repeat(n));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridtoe::Mark;

    #[test]
    fn test_single_square() {
        let mut board = Board::new(1).unwrap();
        board.place(Coord::new(1, 1), Mark::X).unwrap();
        assert_eq!(render_board(&board), " ___  \n|   | \n| X | \n|___| \n");
    }

    #[test]
    fn test_marks_land_in_their_columns() {
        let mut board = Board::new(2).unwrap();
        board.place(Coord::new(2, 1), Mark::O).unwrap();
        board.place(Coord::new(1, 2), Mark::X).unwrap();
        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[2], "|   | | O | ");
        assert_eq!(lines[6], "| X | |   | ");
        assert_eq!(lines[0], " ___   ___  ");
    }
}
