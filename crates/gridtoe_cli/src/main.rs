//! gridtoe - play tic-tac-toe on any n×n board.

use anyhow::Result;
use clap::Parser;
use gridtoe_cli::cli::{Cli, Command};
use gridtoe_cli::{GameConfig, InputError, Terminal, run_play, run_replay, run_suggest};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut console = Terminal::new(std::io::stdin().lock(), std::io::stdout());

    let outcome = match cli.command {
        Command::Play {
            size,
            mode,
            seed,
            config,
            record,
        } => {
            let config =
                GameConfig::load_or_default(&config)?.with_overrides(size, mode, seed, record)?;
            run_play(&config, &mut console).map(|_| ())
        }
        Command::Suggest { size, moves } => run_suggest(size, &moves, &mut console).map(|_| ()),
        Command::Replay { path } => run_replay(&path, &mut console).map(|_| ()),
    };

    match outcome {
        Err(err) if matches!(err.downcast_ref::<InputError>(), Some(InputError::Closed)) => {
            info!("Input closed, exiting");
            eprintln!("Input closed. Goodbye!");
            Ok(())
        }
        other => other,
    }
}
