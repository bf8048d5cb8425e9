//! Core domain types for tic-tac-toe.

use super::{Move, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mark placed on the board by one of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// The human player, rendered as `X`.
    #[strum(to_string = "HUMAN")]
    Human,
    /// The computer player, rendered as `O`.
    #[strum(to_string = "AI")]
    Ai,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Human => Mark::Ai,
            Mark::Ai => Mark::Human,
        }
    }

    /// Payoff of a win for this mark, seen from the Ai's side.
    pub fn payoff(self) -> i8 {
        match self {
            Mark::Human => -1,
            Mark::Ai => 1,
        }
    }

    /// Board symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Human => 'X',
            Mark::Ai => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Number of empty squares left.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the board as three rows with empty squares showing their move number.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let cell = |col: usize| {
                let index = row * 3 + col;
                match self.squares[index] {
                    Square::Empty => char::from(b'1' + index as u8),
                    Square::Occupied(mark) => mark.symbol(),
                }
            };
            writeln!(f, " {} | {} | {} ", cell(0), cell(1), cell(2))?;
            if row < 2 {
                writeln!(f, "-----------")?;
            }
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Mark to move next.
    current_player: Mark,
    /// Game status.
    status: GameStatus,
    /// Moves played, oldest first.
    history: Vec<Move>,
    /// Empty squares left, kept in step with `board`.
    empty_cells: usize,
}

impl GameState {
    /// Creates a new game with `first` to move.
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            current_player: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
            empty_cells: 9,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the number of empty squares.
    pub fn empty_cells(&self) -> usize {
        self.empty_cells
    }

    /// Applies a move (unchecked - use Game::make_move for validation).
    pub(super) fn apply_move(&mut self, pos: Position, mark: Mark) {
        self.board.set(pos, Square::Occupied(mark));
        self.history.push(Move::new(mark, pos));
        self.empty_cells -= 1;
        self.current_player = mark.opponent();
    }

    /// Sets the game status.
    pub(super) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Mark::Human)
    }
}
