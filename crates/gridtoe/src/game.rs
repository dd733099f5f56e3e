//! Phase-specific typestate structs for a game.
//!
//! Each phase is its own type. A `GameFinished` always has an outcome,
//! and only a `GameInProgress` accepts moves.

#[cfg(debug_assertions)]
use super::invariants::{GameInvariants, InvariantSet};
use super::{Board, BoardError, Coord, Mark, Move, MoveError, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Outcome
// ─────────────────────────────────────────────────────────────

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The mark completed a line.
    Winner(Mark),
    /// The board filled up with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase, board empty.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new game on an empty n×n board.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size)?,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game with the first mark to move.
    #[instrument(skip(self), fields(size = self.board.size()))]
    pub fn start(self, first: Mark) -> GameInProgress {
        info!("Game started");
        GameInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: first,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress, accepting moves.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Mark,
}

impl GameInProgress {
    /// Checks a move's preconditions without applying it.
    ///
    /// The coordinate must be on the board, its square empty, and the
    /// mark the one to move.
    pub fn check(&self, action: &Move) -> Result<(), MoveError> {
        if self.board.is_occupied(action.coord)? {
            return Err(MoveError::CellOccupied(action.coord));
        }
        if action.mark != self.to_move {
            return Err(MoveError::WrongPlayer(action.mark));
        }
        Ok(())
    }

    /// Makes a move, consuming self and transitioning to the next phase.
    ///
    /// Preconditions are always checked; invariants in debug builds only.
    #[instrument(skip(self), fields(size = self.board.size()))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        self.check(&action)?;

        let mut game = self;
        if !game.board.place(action.coord, action.mark)? {
            return Err(MoveError::CellOccupied(action.coord));
        }
        game.history.push(action);
        debug!(%action, "Move applied");

        if let Some(winner) = rules::check_winner(&game.board) {
            return Ok(GameResult::Finished(game.finish(Outcome::Winner(winner))));
        }
        if rules::is_full(&game.board) {
            return Ok(GameResult::Finished(game.finish(Outcome::Draw)));
        }

        game.to_move = game.to_move.opponent();

        #[cfg(debug_assertions)]
        if let Err(failed) = GameInvariants::check_all(&game) {
            let names: Vec<_> = failed.iter().map(ToString::to_string).collect();
            return Err(MoveError::InvariantViolation(names.join("; ")));
        }

        Ok(GameResult::InProgress(game))
    }

    fn finish(self, outcome: Outcome) -> GameFinished {
        info!(%outcome, moves = self.history.len(), "Game finished");
        GameFinished {
            board: self.board,
            history: self.history,
            outcome,
        }
    }

    /// Returns the mark to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the empty coordinates.
    pub fn valid_moves(&self) -> Vec<Coord> {
        self.board.empty_cells()
    }

    /// Replays moves on a fresh n×n board.
    ///
    /// The first move's mark starts; an empty list starts with X.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(size: usize, moves: &[Move]) -> Result<GameResult, MoveError> {
        let first = moves.first().map_or(Mark::X, |mv| mv.mark);
        let mut game = GameSetup::new(size)?.start(first);

        for action in moves {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished, outcome determined.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Captures the game for later replay.
    pub fn record(&self) -> GameRecord {
        GameRecord {
            size: self.board.size(),
            moves: self.history.clone(),
            outcome: Some(self.outcome),
        }
    }

    /// Restarts on an empty board of the same size.
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        let mut board = self.board;
        board.clear();
        GameSetup { board }
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

impl GameResult {
    /// Returns the board in either phase.
    pub fn board(&self) -> &Board {
        match self {
            GameResult::InProgress(game) => game.board(),
            GameResult::Finished(game) => game.board(),
        }
    }

    /// Returns the outcome if the game has finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameResult::InProgress(_) => None,
            GameResult::Finished(game) => Some(*game.outcome()),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Record
// ─────────────────────────────────────────────────────────────

/// Serializable game transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Board size.
    pub size: usize,
    /// Moves in play order.
    pub moves: Vec<Move>,
    /// Outcome, if the game finished.
    #[serde(default)]
    pub outcome: Option<Outcome>,
}

impl GameRecord {
    /// Serializes the record as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a record from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replays the recorded moves.
    ///
    /// Fails if a move is illegal or the replayed outcome disagrees with
    /// the recorded one.
    #[instrument(skip(self), fields(size = self.size, moves = self.moves.len()))]
    pub fn replay(&self) -> Result<GameResult, MoveError> {
        let result = GameInProgress::replay(self.size, &self.moves)?;
        if self.outcome.is_some() && result.outcome() != self.outcome {
            return Err(MoveError::InvariantViolation(format!(
                "recorded outcome {:?} but replay gives {:?}",
                self.outcome,
                result.outcome()
            )));
        }
        Ok(result)
    }
}
