//! Console front end: prompts, board rendering and the game loop.

mod orchestrator;
mod players;
mod screen;
mod ui;

pub use orchestrator::Orchestrator;
pub use players::{HumanPlayer, MinimaxPlayer, Player, read_line};
pub use screen::{ClearMethod, ScreenConfig, ScreenError};
pub use ui::{result_line, write_banner, write_board};

use crate::config::{FirstPlayer, GameConfig};
use crate::games::tictactoe::{GameStatus, Searcher};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument};

const FIRST_PROMPT: &str = "Would you like to go first or second? [1 / 2] ";

/// Asks who moves first until the answer is 1 or 2.
pub fn ask_first_player(input: &mut impl BufRead, out: &mut impl Write) -> Result<FirstPlayer> {
    loop {
        write!(out, "{}", FIRST_PROMPT)?;
        out.flush()?;

        let line = read_line(input)?;
        if let Some(first) = FirstPlayer::from_answer(&line) {
            return Ok(first);
        }
        debug!(input = %line.trim(), "Rejected first-player answer");
    }
}

/// Plays one game on the given streams.
///
/// Shows the banner, settles who moves first (from `config` or by asking),
/// then hands the input to the human player and runs the game loop.
#[instrument(skip_all, fields(pruning = *config.pruning()))]
pub fn play<R, W>(config: &GameConfig, screen: &ScreenConfig, mut input: R, mut out: W) -> Result<GameStatus>
where
    R: BufRead + 'static,
    W: Write,
{
    screen.clear(&mut out)?;
    write_banner(&mut out)?;

    let first = match config.first_player() {
        Some(first) => *first,
        None => ask_first_player(&mut input, &mut out)?,
    };
    info!(?first, "First player chosen");

    let human = Box::new(HumanPlayer::new("Human", input));
    let ai = Box::new(MinimaxPlayer::new("AI", Searcher::new(*config.pruning())));

    let mut orchestrator = Orchestrator::new(first.mark(), human, ai, screen.clone(), out);
    orchestrator.run()
}

/// Plays one game on the process's stdin and stdout.
pub fn run(config: &GameConfig, screen: &ScreenConfig) -> Result<GameStatus> {
    play(config, screen, io::stdin().lock(), io::stdout())
}
