//! gridtoe terminal front end
//!
//! Prompting, rendering and turn orchestration for playing gridtoe in a
//! terminal, either two humans sharing a keyboard or a human against the
//! computer.
//!
//! # Architecture
//!
//! - **Input**: a [`Console`] that prints lines and reads validated answers
//! - **Players**: human and computer implementations of [`Player`]
//! - **Orchestrator**: the turn loop and its announcements
//! - **App**: the `play`, `suggest` and `replay` commands

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
pub mod cli;
mod config;
mod input;
mod orchestrator;
pub mod players;
mod render;

pub use app::{load_record, parse_moves, run_play, run_replay, run_suggest, save_record};
pub use config::{ConfigError, GameConfig, Mode};
pub use input::{
    Console, InputError, Terminal, ask, ask_coordinate, ask_mode, ask_size, parse_coordinate,
    parse_mode, parse_positive,
};
pub use orchestrator::Orchestrator;
pub use players::{Address, ComputerPlayer, HumanPlayer, Player};
pub use render::render_board;
