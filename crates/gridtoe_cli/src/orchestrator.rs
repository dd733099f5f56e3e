//! Game orchestration between two players.

use crate::input::Console;
use crate::players::Player;
use crate::render::render_board;
use anyhow::{Result, bail};
use gridtoe::{GameFinished, GameResult, GameSetup, Mark, Move};
use tracing::{debug, info, instrument};

/// Runs a game between two players on a shared console.
pub struct Orchestrator {
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates an orchestrator; X moves first.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Result<Self> {
        if player_x.mark() != Mark::X || player_o.mark() != Mark::O {
            bail!("players must hold X and O respectively");
        }
        Ok(Self { player_x, player_o })
    }

    fn player(&mut self, mark: Mark) -> &mut dyn Player {
        match mark {
            Mark::X => self.player_x.as_mut(),
            Mark::O => self.player_o.as_mut(),
        }
    }

    /// Plays a game to completion and announces the result.
    #[instrument(skip(self, console))]
    pub fn run(&mut self, size: usize, console: &mut dyn Console) -> Result<GameFinished> {
        info!("Starting game orchestration");
        let mut game = GameSetup::new(size)?.start(Mark::X);

        let finished = loop {
            let mark = game.to_move();
            let player = self.player(mark);
            console.say(&player.turn_message())?;

            debug!(%mark, "Waiting for move");
            let coord = player.get_move(&game, console)?;

            match game.make_move(Move::new(mark, coord))? {
                GameResult::InProgress(next) => {
                    console.show(&render_board(next.board()))?;
                    game = next;
                }
                GameResult::Finished(done) => {
                    console.show(&render_board(done.board()))?;
                    break done;
                }
            }
        };

        let result = match finished.outcome().winner() {
            Some(mark) => self.player(mark).win_message(),
            None => "It's a draw!".to_string(),
        };
        console.say(&format!("{} Thanks for playing!", result))?;
        Ok(finished)
    }
}
