//! Game orchestration between the human and the computer.

use super::players::Player;
use super::screen::ScreenConfig;
use super::ui;
use crate::games::tictactoe::{Game, GameStatus, Mark};
use anyhow::Result;
use std::io::Write;
use tracing::{debug, info, instrument};

/// Runs one game, alternating between the two players.
pub struct Orchestrator<W> {
    game: Game,
    human: Box<dyn Player>,
    ai: Box<dyn Player>,
    screen: ScreenConfig,
    out: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator with `first` to move.
    pub fn new(
        first: Mark,
        human: Box<dyn Player>,
        ai: Box<dyn Player>,
        screen: ScreenConfig,
        out: W,
    ) -> Self {
        Self {
            game: Game::new(first),
            human,
            ai,
            screen,
            out,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays until a win or a full board and returns the final status.
    ///
    /// The board is redrawn before every human move and once more at the
    /// end, followed by the result line.
    #[instrument(skip(self), fields(first = %self.game.state().current_player()))]
    pub fn run(&mut self) -> Result<GameStatus> {
        info!("Starting game orchestration");

        while !self.game.is_over() {
            let mark = self.game.state().current_player();

            let player = match mark {
                Mark::Human => {
                    self.screen.clear(&mut self.out)?;
                    ui::write_board(&mut self.out, self.game.state().board())?;
                    &mut self.human
                }
                Mark::Ai => &mut self.ai,
            };

            debug!(player = %player.name(), "Waiting for move");
            let position = player.choose_move(&self.game, &mut self.out)?;
            let status = self.game.make_move(position)?;

            info!(%mark, %position, ?status, "Move made");
        }

        let status = self.game.state().status();
        self.screen.clear(&mut self.out)?;
        ui::write_board(&mut self.out, self.game.state().board())?;
        writeln!(self.out, "{}", ui::result_line(status))?;
        self.out.flush()?;

        info!(?status, "Game over");
        Ok(status)
    }
}
