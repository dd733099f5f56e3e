//! Human player that types coordinates.

use super::Player;
use crate::input::{Console, ask_coordinate};
use anyhow::Result;
use gridtoe::{Coord, GameInProgress, Mark, Move, MoveError};
use tracing::{debug, instrument};

/// How announcements refer to a human.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Address {
    /// "Player X" (two humans share the terminal).
    ByMark,
    /// "You" (playing the computer).
    You,
}

/// Human player reading x and y from the console.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    mark: Mark,
    address: Address,
}

impl HumanPlayer {
    /// Creates a human player.
    pub fn new(mark: Mark, address: Address) -> Self {
        Self { mark, address }
    }
}

impl Player for HumanPlayer {
    #[instrument(skip(self, game, console), fields(mark = %self.mark))]
    fn get_move(&mut self, game: &GameInProgress, console: &mut dyn Console) -> Result<Coord> {
        let size = game.board().size();
        loop {
            let column = ask_coordinate(console, "x", size)?;
            let row = ask_coordinate(console, "y", size)?;
            let coord = Coord::new(column, row);
            match game.check(&Move::new(self.mark, coord)) {
                Ok(()) => return Ok(coord),
                Err(MoveError::CellOccupied(_)) => {
                    debug!(%coord, "Square taken, asking again");
                    console.say("This square has already been used at this location!")?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn turn_message(&self) -> String {
        match self.address {
            Address::ByMark => format!("It's player {}'s turn.", self.mark),
            Address::You => "It's your turn.".to_string(),
        }
    }

    fn win_message(&self) -> String {
        match self.address {
            Address::ByMark => format!("Player {} wins!", self.mark),
            Address::You => "You win!".to_string(),
        }
    }
}
