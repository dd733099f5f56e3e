//! Scenario tests for the computer's move selection.

use gridtoe::{
    Board, Coord, GameInProgress, GameResult, GameSetup, Mark, Move, MoveHeuristic, Outcome, Rule,
    choose_computer_move,
};
use proptest::prelude::*;

fn c(column: usize, row: usize) -> Coord {
    Coord::new(column, row)
}

fn board(xs: &[(usize, usize)], os: &[(usize, usize)]) -> Board {
    let mut board = Board::new(3).unwrap();
    for &(column, row) in xs {
        board.place(c(column, row), Mark::X).unwrap();
    }
    for &(column, row) in os {
        board.place(c(column, row), Mark::O).unwrap();
    }
    board
}

#[test]
fn test_blocks_row_threat() {
    let b = board(&[(1, 1), (2, 1)], &[]);
    assert_eq!(choose_computer_move(&b, Mark::O, Mark::X), Ok(c(3, 1)));
}

#[test]
fn test_completes_diagonal() {
    let b = board(&[(1, 2), (3, 2)], &[(1, 1), (2, 2)]);
    assert_eq!(choose_computer_move(&b, Mark::O, Mark::X), Ok(c(3, 3)));
}

#[test]
fn test_empty_board_takes_center() {
    let b = Board::new(3).unwrap();
    assert_eq!(choose_computer_move(&b, Mark::O, Mark::X), Ok(c(2, 2)));
}

#[test]
fn test_roles_can_be_swapped() {
    let b = board(&[(1, 1), (2, 2)], &[(1, 2), (2, 3)]);
    let decision = MoveHeuristic::new().decide(&b, Mark::X, Mark::O).unwrap();
    assert_eq!(decision.coord, c(3, 3));
    assert_eq!(decision.rule, Rule::Win);
}

/// Plays every possible sequence of human moves against the computer.
fn explore(game: GameInProgress, tally: &mut [usize; 3]) {
    for coord in game.valid_moves() {
        let after_human = match game.clone().make_move(Move::new(Mark::X, coord)).unwrap() {
            GameResult::InProgress(g) => g,
            GameResult::Finished(done) => {
                record(*done.outcome(), tally);
                continue;
            }
        };
        let reply = choose_computer_move(after_human.board(), Mark::O, Mark::X).unwrap();
        match after_human.make_move(Move::new(Mark::O, reply)).unwrap() {
            GameResult::InProgress(g) => explore(g, tally),
            GameResult::Finished(done) => record(*done.outcome(), tally),
        }
    }
}

fn record(outcome: Outcome, tally: &mut [usize; 3]) {
    match outcome {
        Outcome::Winner(Mark::X) => tally[0] += 1,
        Outcome::Winner(Mark::O) => tally[1] += 1,
        Outcome::Draw => tally[2] += 1,
    }
}

#[test]
fn test_computer_never_loses_on_3x3() {
    let mut tally = [0; 3];
    explore(GameSetup::new(3).unwrap().start(Mark::X), &mut tally);
    assert_eq!(tally[0], 0, "human won {} lines", tally[0]);
    assert!(tally[1] > 0);
    assert!(tally[2] > 0);
}

#[test]
fn test_self_play_is_a_draw() {
    let mut game = GameSetup::new(3).unwrap().start(Mark::X);
    loop {
        let mark = game.to_move();
        let coord = choose_computer_move(game.board(), mark, mark.opponent()).unwrap();
        match game.make_move(Move::new(mark, coord)).unwrap() {
            GameResult::InProgress(g) => game = g,
            GameResult::Finished(done) => {
                assert_eq!(*done.outcome(), Outcome::Draw);
                break;
            }
        }
    }
}

fn partial_board() -> impl Strategy<Value = Board> {
    (1usize..=5)
        .prop_flat_map(|n| (Just(n), prop::collection::vec(0u8..3, n * n)))
        .prop_map(|(n, cells)| {
            let mut board = Board::new(n).unwrap();
            for (offset, code) in cells.iter().enumerate() {
                let coord = Coord::new(offset % n + 1, offset / n + 1);
                match code {
                    1 => board.place(coord, Mark::X).unwrap(),
                    2 => board.place(coord, Mark::O).unwrap(),
                    _ => false,
                };
            }
            board
        })
}

proptest! {
    #[test]
    fn chosen_square_is_empty_and_board_untouched(b in partial_board(), seed in any::<u64>()) {
        let before = b.clone();
        let chosen = MoveHeuristic::seeded(seed).choose(&b, Mark::O, Mark::X);
        prop_assert_eq!(&b, &before);
        if b.is_full() {
            prop_assert!(chosen.is_err());
        } else {
            let coord = chosen.unwrap();
            prop_assert!(b.empty_cells().contains(&coord));
        }
    }
}
