//! Entry points for the `play`, `suggest` and `replay` commands.

use crate::config::{GameConfig, Mode};
use crate::input::{Console, ask_mode, ask_size};
use crate::orchestrator::Orchestrator;
use crate::players::{Address, ComputerPlayer, HumanPlayer, Player};
use crate::render::render_board;
use anyhow::{Context, Result, bail};
use gridtoe::{
    Coord, Decision, GameFinished, GameInProgress, GameRecord, GameResult, Mark, Move,
    MoveHeuristic,
};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Plays one interactive game.
///
/// Size and mode missing from `config` are asked for. The finished game is
/// written to the configured record path, if any.
#[instrument(skip(console))]
pub fn run_play(config: &GameConfig, console: &mut dyn Console) -> Result<GameFinished> {
    let size = match config.size() {
        Some(size) => *size,
        None => ask_size(console)?,
    };
    let mode = match config.mode() {
        Some(mode) => *mode,
        None => ask_mode(console)?,
    };
    info!(size, ?mode, "Starting game");

    let (player_x, player_o): (Box<dyn Player>, Box<dyn Player>) = match mode {
        Mode::Pvp => (
            Box::new(HumanPlayer::new(Mark::X, Address::ByMark)),
            Box::new(HumanPlayer::new(Mark::O, Address::ByMark)),
        ),
        Mode::Pvc => (
            Box::new(HumanPlayer::new(Mark::X, Address::You)),
            Box::new(ComputerPlayer::new(Mark::O, *config.seed())),
        ),
    };

    let finished = Orchestrator::new(player_x, player_o)?.run(size, console)?;

    if let Some(path) = config.record() {
        save_record(&finished.record(), path)?;
    }
    Ok(finished)
}

/// Writes a game record as JSON.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn save_record(record: &GameRecord, path: &Path) -> Result<()> {
    let json = record.to_json().context("Failed to serialize game record")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write game record to {}", path.display()))?;
    info!("Game record saved");
    Ok(())
}

/// Reads a game record from a JSON file.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_record(path: &Path) -> Result<GameRecord> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read game record from {}", path.display()))?;
    GameRecord::from_json(&json).context("Failed to parse game record")
}

/// Parses `"x,y;x,y;..."` into moves alternating from X.
///
/// Blank input means no moves. Whitespace around numbers is ignored.
pub fn parse_moves(text: &str) -> Result<Vec<Move>> {
    let mut mark = Mark::X;
    let mut moves = Vec::new();
    for pair in text.split(';').map(str::trim).filter(|pair| !pair.is_empty()) {
        let Some((column, row)) = pair.split_once(',') else {
            bail!("Expected \"x,y\" but found \"{}\"", pair);
        };
        let column: usize = column
            .trim()
            .parse()
            .with_context(|| format!("Invalid x in \"{}\"", pair))?;
        let row: usize = row
            .trim()
            .parse()
            .with_context(|| format!("Invalid y in \"{}\"", pair))?;
        moves.push(Move::new(mark, Coord::new(column, row)));
        mark = mark.opponent();
    }
    Ok(moves)
}

/// Prints the computer's choice for the side to move after `moves`.
#[instrument(skip(console))]
pub fn run_suggest(size: usize, moves: &str, console: &mut dyn Console) -> Result<Decision> {
    let moves = parse_moves(moves)?;
    let game = match GameInProgress::replay(size, &moves)? {
        GameResult::InProgress(game) => game,
        GameResult::Finished(done) => bail!("The game is already over: {}", done.outcome()),
    };

    let mark = game.to_move();
    debug!(%mark, "Suggesting move");
    let decision = MoveHeuristic::new().decide(game.board(), mark, mark.opponent())?;

    console.show(&render_board(game.board()))?;
    console.say(&format!(
        "{} [{}]",
        Move::new(mark, decision.coord),
        decision.rule
    ))?;
    Ok(decision)
}

/// Replays a recorded game and prints the final position.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn run_replay(path: &Path, console: &mut dyn Console) -> Result<GameResult> {
    let record = load_record(path)?;
    let result = record.replay()?;

    console.show(&render_board(result.board()))?;
    match &result {
        GameResult::Finished(done) => console.say(&done.outcome().to_string())?,
        GameResult::InProgress(game) => {
            console.say(&format!("Unfinished game, {} to move.", game.to_move()))?
        }
    }
    Ok(result)
}
