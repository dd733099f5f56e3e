//! Game rules for n×n tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state.
//! Rules are separated from board storage so the game controller and
//! the invariants can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;
