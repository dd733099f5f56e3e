//! Rule-based move selection for the computer opponent.
//!
//! The computer ranks moves in a fixed priority order:
//!
//! 1. A winning move
//! 2. Blocking the opponent's winning move
//! 3. A move that creates a fork (two ways to win next turn)
//! 4. Defusing the opponent's fork, by forcing a reply or by taking the fork square
//! 5. Center
//! 6. Corners
//! 7. Anything else
//!
//! The ranking is tuned for the traditional 3×3 game and is only an
//! approximation on other sizes. Every hypothetical placement is made on an
//! owned clone; the board passed in is never touched.

use crate::{Board, Coord, HeuristicError, Mark};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument, trace};

// ─────────────────────────────────────────────────────────────
//  Decisions
// ─────────────────────────────────────────────────────────────

/// The rule that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Rule {
    /// Only one empty square was left.
    OnlyMove,
    /// The move wins immediately.
    Win,
    /// The move blocks the opponent's immediate win.
    Block,
    /// The move creates two winning threats.
    Fork,
    /// The move forces a reply that leaves the opponent without a fork.
    Counter,
    /// The move occupies the opponent's fork square.
    BlockFork,
    /// The move takes a center square.
    Center,
    /// The move takes a corner square.
    Corner,
    /// Any remaining square.
    Any,
}

/// A chosen coordinate together with the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Where to play.
    pub coord: Coord,
    /// Why.
    pub rule: Rule,
}

/// How to choose among equally ranked center, corner or fallback squares.
#[derive(Debug, Clone)]
enum TieBreak {
    /// Take the first square in row-major order.
    First,
    /// Pick uniformly at random.
    Random(ChaCha8Rng),
}

impl TieBreak {
    fn pick(&mut self, options: &[Coord]) -> Option<Coord> {
        match self {
            TieBreak::First => options.first().copied(),
            TieBreak::Random(rng) => options.choose(rng).copied(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Heuristic
// ─────────────────────────────────────────────────────────────

/// Computer move selection.
#[derive(Debug, Clone)]
pub struct MoveHeuristic {
    tie_break: TieBreak,
}

impl MoveHeuristic {
    /// Creates a fully deterministic heuristic.
    pub fn new() -> Self {
        Self {
            tie_break: TieBreak::First,
        }
    }

    /// Creates a heuristic that breaks ties with a seeded RNG.
    pub fn seeded(seed: u64) -> Self {
        Self {
            tie_break: TieBreak::Random(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Creates a heuristic that breaks ties with an OS-seeded RNG.
    pub fn from_entropy() -> Self {
        Self {
            tie_break: TieBreak::Random(ChaCha8Rng::from_entropy()),
        }
    }

    /// Chooses a move for `computer` against `human`.
    pub fn choose(
        &mut self,
        board: &Board,
        computer: Mark,
        human: Mark,
    ) -> Result<Coord, HeuristicError> {
        self.decide(board, computer, human).map(|decision| decision.coord)
    }

    /// Chooses a move and reports which rule selected it.
    #[instrument(skip(self, board), fields(size = board.size()))]
    pub fn decide(
        &mut self,
        board: &Board,
        computer: Mark,
        human: Mark,
    ) -> Result<Decision, HeuristicError> {
        let empty = board.empty_cells();
        let decision = match empty.as_slice() {
            [] => return Err(HeuristicError::NoEmptyCells),
            [only] => Decision {
                coord: *only,
                rule: Rule::OnlyMove,
            },
            _ => self.rank(board, computer, human, &empty),
        };
        debug!(coord = %decision.coord, rule = %decision.rule, "Computer chose move");
        Ok(decision)
    }

    fn rank(&mut self, board: &Board, computer: Mark, human: Mark, empty: &[Coord]) -> Decision {
        let found = |coord, rule| Decision { coord, rule };

        if let Some(coord) = winning_move(board, computer, empty) {
            return found(coord, Rule::Win);
        }
        if let Some(coord) = winning_move(board, human, empty) {
            return found(coord, Rule::Block);
        }
        if let Some(coord) = fork_move(board, computer, empty) {
            return found(coord, Rule::Fork);
        }
        if let Some(fork) = fork_move(board, human, empty) {
            trace!(%fork, "Opponent has a fork square");
            return match counter_move(board, computer, human, fork, empty) {
                Some(coord) => found(coord, Rule::Counter),
                None => found(fork, Rule::BlockFork),
            };
        }

        let open_center = open_among(board.center(), empty);
        if let Some(coord) = self.tie_break.pick(&open_center) {
            return found(coord, Rule::Center);
        }
        let open_corners = open_among(board.corners(), empty);
        if let Some(coord) = self.tie_break.pick(&open_corners) {
            return found(coord, Rule::Corner);
        }
        // `empty` has at least two squares here.
        let coord = self.tie_break.pick(empty).unwrap_or(empty[0]);
        found(coord, Rule::Any)
    }
}

impl Default for MoveHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

/// Chooses the computer's move with deterministic tie-breaking.
///
/// Fails only when the board has no empty square.
pub fn choose_computer_move(
    board: &Board,
    computer: Mark,
    human: Mark,
) -> Result<Coord, HeuristicError> {
    MoveHeuristic::new().choose(board, computer, human)
}

// ─────────────────────────────────────────────────────────────
//  Simulation
// ─────────────────────────────────────────────────────────────

/// Returns a copy of `board` with `mark` placed at `coord`.
///
/// `None` if the square is taken or off the board.
pub fn simulate(board: &Board, coord: Coord, mark: Mark) -> Option<Board> {
    let mut next = board.clone();
    matches!(next.place(coord, mark), Ok(true)).then_some(next)
}

fn without(cells: &[Coord], skip: &[Coord]) -> Vec<Coord> {
    cells
        .iter()
        .copied()
        .filter(|coord| !skip.contains(coord))
        .collect()
}

fn open_among(preferred: Vec<Coord>, empty: &[Coord]) -> Vec<Coord> {
    preferred
        .into_iter()
        .filter(|coord| empty.contains(coord))
        .collect()
}

/// Candidates on which `mark` would win with its next placement.
pub fn winning_cells(board: &Board, mark: Mark, candidates: &[Coord]) -> Vec<Coord> {
    candidates
        .iter()
        .copied()
        .filter(|&coord| simulate(board, coord, mark).is_some_and(|next| next.wins(mark)))
        .collect()
}

/// First candidate on which `mark` wins immediately.
pub fn winning_move(board: &Board, mark: Mark, candidates: &[Coord]) -> Option<Coord> {
    candidates
        .iter()
        .copied()
        .find(|&coord| simulate(board, coord, mark).is_some_and(|next| next.wins(mark)))
}

/// Checks whether placing `mark` at `coord` leaves two or more winning squares
/// among the other candidates.
pub fn creates_fork(board: &Board, coord: Coord, mark: Mark, candidates: &[Coord]) -> bool {
    let rest = without(candidates, &[coord]);
    if rest.len() < 2 {
        return false;
    }
    let Some(next) = simulate(board, coord, mark) else {
        return false;
    };
    let threats = rest
        .iter()
        .filter(|&&follow_up| simulate(&next, follow_up, mark).is_some_and(|b| b.wins(mark)))
        .take(2)
        .count();
    threats >= 2
}

/// First candidate that creates a fork for `mark`.
pub fn fork_move(board: &Board, mark: Mark, candidates: &[Coord]) -> Option<Coord> {
    candidates
        .iter()
        .copied()
        .find(|&coord| creates_fork(board, coord, mark, candidates))
}

/// Looks for a square that defuses the opponent's fork at `fork` without
/// occupying it.
///
/// The computer plays the candidate and the human replies. If the candidate
/// sets up a computer win, the human must block it, and the candidate is
/// accepted when that forced reply leaves the human at most one winning
/// square for the computer to answer. Otherwise the human takes `fork`, and
/// the candidate is accepted only if no human placement then wins.
pub fn counter_move(
    board: &Board,
    computer: Mark,
    human: Mark,
    fork: Coord,
    candidates: &[Coord],
) -> Option<Coord> {
    without(candidates, &[fork]).into_iter().find(|&counter| {
        let Some(after_counter) = simulate(board, counter, computer) else {
            return false;
        };
        let open = without(candidates, &[counter]);
        let (reply, allowed) = match winning_move(&after_counter, computer, &open) {
            Some(threat) => (threat, 1),
            None => (fork, 0),
        };
        let Some(after_reply) = simulate(&after_counter, reply, human) else {
            return false;
        };
        let rest = without(&open, &[reply]);
        let threats = winning_cells(&after_reply, human, &rest);
        trace!(%counter, %reply, threats = threats.len(), "Evaluated counter");
        threats.len() <= allowed
    })
}
