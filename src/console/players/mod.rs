//! Player trait and implementations.

mod human;
mod minimax;

pub use human::{HumanPlayer, read_line};
pub use minimax::MinimaxPlayer;

use crate::games::tictactoe::{Game, Position};
use anyhow::Result;
use std::io::Write;

/// Trait for players that can make moves.
pub trait Player {
    /// Picks the next move for the side to move in `game`.
    ///
    /// Prompts and feedback go to `out`. The returned position is always
    /// an empty square.
    fn choose_move(&mut self, game: &Game, out: &mut dyn Write) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
