//! gridtoe - generalized n-by-n tic-tac-toe
//!
//! Board state, rules and a heuristic computer opponent for tic-tac-toe on
//! boards of any size.
//!
//! # Architecture
//!
//! - **Board**: dense n×n grid with win/full detection and cheap clones
//! - **Rules**: pure win and draw evaluation
//! - **Heuristic**: rule-ranked move selection that simulates on clones
//! - **Game**: typestate controller (setup → in progress → finished)
//! - **Invariants**: properties checked after every move in debug builds
//!
//! # Example
//!
//! ```
//! use gridtoe::{choose_computer_move, Board, Coord, Mark};
//!
//! let mut board = Board::new(3)?;
//! board.place(Coord::new(1, 1), Mark::X)?;
//! board.place(Coord::new(2, 1), Mark::X)?;
//!
//! let reply = choose_computer_move(&board, Mark::O, Mark::X)?;
//! assert_eq!(reply, Coord::new(3, 1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod game;
pub mod heuristic;
pub mod invariants;
pub mod rules;
mod types;

pub use action::Move;
pub use board::Board;
pub use error::{BoardError, HeuristicError, MoveError};
pub use game::{GameFinished, GameInProgress, GameRecord, GameResult, GameSetup, Outcome};
pub use heuristic::{Decision, MoveHeuristic, Rule, choose_computer_move};
pub use types::{Coord, Mark, Square};
