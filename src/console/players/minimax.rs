//! Computer player backed by the minimax search.

use super::Player;
use crate::games::tictactoe::{Game, Position, Searcher};
use anyhow::Result;
use std::io::Write;
use tracing::{debug, info};

/// Computer player that always plays a game-theoretically optimal move.
pub struct MinimaxPlayer {
    name: String,
    searcher: Searcher,
}

impl MinimaxPlayer {
    /// Creates a new minimax player.
    pub fn new(name: impl Into<String>, searcher: Searcher) -> Self {
        Self {
            name: name.into(),
            searcher,
        }
    }
}

impl Player for MinimaxPlayer {
    fn choose_move(&mut self, game: &Game, _out: &mut dyn Write) -> Result<Position> {
        debug!(ai = %self.name, "AI making move");

        let state = game.state();
        let result = self.searcher.search(
            state.board(),
            state.current_player(),
            state.empty_cells(),
        );

        let pos = result
            .best_move
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;

        info!(
            ai = %self.name,
            position = %pos,
            payoff = result.payoff,
            nodes = result.nodes,
            "AI chose position"
        );
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;

    #[test]
    fn test_takes_winning_square() {
        // Ai opens, then the game reaches O O . / X X . / . . .
        let mut game = Game::new(Mark::Ai);
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
        ] {
            game.make_move(pos).unwrap();
        }

        let mut ai = MinimaxPlayer::new("AI", Searcher::default());
        let pos = ai.choose_move(&game, &mut std::io::sink()).unwrap();
        assert_eq!(pos, Position::TopRight);
    }

    #[test]
    fn test_finished_game_has_no_move() {
        let mut game = Game::new(Mark::Human);
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ] {
            game.make_move(pos).unwrap();
        }

        let mut ai = MinimaxPlayer::new("AI", Searcher::new(true));
        assert!(ai.choose_move(&game, &mut std::io::sink()).is_err());
    }
}
