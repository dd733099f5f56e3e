//! Mark balance invariant: players alternate.

use super::Invariant;
use crate::GameInProgress;
use tracing::{instrument, warn};

/// Invariant: the two marks' counts differ by at most one.
///
/// With alternating turns neither player can get two placements ahead.
pub struct MarkBalanceInvariant;

impl Invariant<GameInProgress> for MarkBalanceInvariant {
    const NAME: &'static str = "Marks on the board differ in count by at most one";

    #[instrument(skip(game))]
    fn holds(game: &GameInProgress) -> bool {
        let x_count = game.board().count(crate::Mark::X);
        let o_count = game.board().count(crate::Mark::O);
        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, GameResult, GameSetup, Mark, Move};

    #[test]
    fn test_holds_through_alternating_play() {
        let mut game = GameSetup::new(3).unwrap().start(Mark::X);
        for (column, row) in [(1, 1), (2, 2), (3, 1), (2, 1)] {
            let mv = Move::new(game.to_move(), Coord::new(column, row));
            game = match game.make_move(mv).unwrap() {
                GameResult::InProgress(g) => g,
                GameResult::Finished(_) => panic!("game ended early"),
            };
            assert!(MarkBalanceInvariant::holds(&game));
        }
    }
}
