//! Computer player backed by the move heuristic.

use super::Player;
use crate::input::Console;
use anyhow::Result;
use gridtoe::{Coord, GameInProgress, Mark, MoveHeuristic};
use tracing::{info, instrument};

/// Computer opponent.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    mark: Mark,
    heuristic: MoveHeuristic,
}

impl ComputerPlayer {
    /// Creates a computer player; `seed` fixes its tie-breaking.
    pub fn new(mark: Mark, seed: Option<u64>) -> Self {
        let heuristic = match seed {
            Some(seed) => MoveHeuristic::seeded(seed),
            None => MoveHeuristic::from_entropy(),
        };
        Self { mark, heuristic }
    }

    /// Creates a computer player with a given heuristic.
    pub fn with_heuristic(mark: Mark, heuristic: MoveHeuristic) -> Self {
        Self { mark, heuristic }
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip_all, fields(mark = %self.mark))]
    fn get_move(&mut self, game: &GameInProgress, _console: &mut dyn Console) -> Result<Coord> {
        let decision = self
            .heuristic
            .decide(game.board(), self.mark, self.mark.opponent())?;
        info!(coord = %decision.coord, rule = %decision.rule, "Computer moved");
        Ok(decision.coord)
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn turn_message(&self) -> String {
        "It's the computer's turn.".to_string()
    }

    fn win_message(&self) -> String {
        "Computer wins!".to_string()
    }
}
