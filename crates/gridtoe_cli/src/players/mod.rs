//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{Address, HumanPlayer};

use crate::input::Console;
use anyhow::Result;
use gridtoe::{Coord, GameInProgress, Mark};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a legal move for the player's mark.
    ///
    /// The returned coordinate is empty on the current board.
    fn get_move(&mut self, game: &GameInProgress, console: &mut dyn Console) -> Result<Coord>;

    /// Returns the mark this player places.
    fn mark(&self) -> Mark;

    /// Line announcing the player's turn.
    fn turn_message(&self) -> String;

    /// Line announcing the player's win.
    fn win_message(&self) -> String;
}
