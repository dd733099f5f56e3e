//! History consistency invariant.

use super::Invariant;
use crate::{GameInProgress, Square};
use tracing::{instrument, warn};

/// Invariant: the move history describes the board exactly.
///
/// Every recorded move's square holds its mark, and there are as many
/// occupied squares as recorded moves.
pub struct HistoryConsistentInvariant;

impl Invariant<GameInProgress> for HistoryConsistentInvariant {
    const NAME: &'static str = "Move history matches the occupied squares";

    #[instrument(skip(game))]
    fn holds(game: &GameInProgress) -> bool {
        let board = game.board();
        let occupied = board.squares().iter().filter(|s| !s.is_empty()).count();
        let history_len = game.history().len();
        if occupied != history_len {
            warn!(occupied, history_len, "History length does not match board");
            return false;
        }

        game.history().iter().all(|mv| {
            let matches = board.get(mv.coord) == Ok(Square::Occupied(mv.mark));
            if !matches {
                warn!(%mv, "Recorded move missing from board");
            }
            matches
        })
    }
}
