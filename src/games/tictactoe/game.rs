//! Game logic and rules for tic-tac-toe.

use super::rules::{check_winner, is_full};
use super::types::{GameState, GameStatus};
use super::{Mark, MoveError, Position};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the single board of a game and keeps its empty-square count in
/// step with every move, so callers can hand both straight to the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game with `first` to move.
    #[instrument]
    pub fn new(first: Mark) -> Self {
        Self {
            state: GameState::new(first),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.state.status() != GameStatus::InProgress
    }

    /// Places the current player's mark at `pos`.
    #[instrument(skip(self), fields(mark = %self.state.current_player()))]
    pub fn make_move(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        if !self.state.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mark = self.state.current_player();
        self.state.apply_move(pos, mark);
        self.update_status();

        debug!(
            position = %pos,
            empty_cells = self.state.empty_cells(),
            status = ?self.state.status(),
            "Move applied"
        );

        Ok(self.state.status())
    }

    /// Updates game status after a move.
    fn update_status(&mut self) {
        let board = self.state.board();
        if let Some(winner) = check_winner(board) {
            self.state.set_status(GameStatus::Won(winner));
        } else if is_full(board) {
            self.state.set_status(GameStatus::Draw);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Mark::Human)
    }
}
