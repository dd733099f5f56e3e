//! Command-line interface for gridtoe.

use crate::config::Mode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gridtoe - tic-tac-toe on an n×n board
#[derive(Parser, Debug)]
#[command(name = "gridtoe")]
#[command(about = "Tic-tac-toe on any n×n board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Board size (prompted for if neither given here nor in the config)
        #[arg(short, long)]
        size: Option<usize>,

        /// Opponent: another player or the computer
        #[arg(short, long, value_enum)]
        mode: Option<Mode>,

        /// Seed for the computer's tie-breaking (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a TOML config file
        #[arg(short, long, default_value = "gridtoe.toml")]
        config: PathBuf,

        /// Write the finished game as JSON to this path
        #[arg(long)]
        record: Option<PathBuf>,
    },

    /// Print the computer's move for a position
    Suggest {
        /// Board size
        #[arg(short, long, default_value = "3")]
        size: usize,

        /// Moves played so far as "x,y;x,y;...", alternating from X
        #[arg(long, default_value = "")]
        moves: String,
    },

    /// Replay a recorded game and show the final board
    Replay {
        /// Path to a JSON game record
        path: PathBuf,
    },
}
