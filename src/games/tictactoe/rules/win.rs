//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};

/// Winning lines in evaluation order: columns, rows, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The Ai holds a full line.
    AiWins,
    /// The human holds a full line.
    PlayerWins,
    /// No line is complete; the game is drawn or still open.
    NoneYet,
}

impl Outcome {
    /// Signed code from the Ai's side: +1, -1 or 0.
    pub fn payoff(self) -> i8 {
        match self {
            Outcome::AiWins => 1,
            Outcome::PlayerWins => -1,
            Outcome::NoneYet => 0,
        }
    }

    /// The winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::AiWins => Some(Mark::Ai),
            Outcome::PlayerWins => Some(Mark::Human),
            Outcome::NoneYet => None,
        }
    }
}

impl From<Option<Mark>> for Outcome {
    fn from(winner: Option<Mark>) -> Self {
        match winner {
            Some(Mark::Ai) => Outcome::AiWins,
            Some(Mark::Human) => Outcome::PlayerWins,
            None => Outcome::NoneYet,
        }
    }
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first completed line found,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(mark) => Some(mark),
                Square::Empty => None,
            };
        }
    }

    None
}

/// Evaluates the board into an [`Outcome`].
pub fn evaluate(board: &Board) -> Outcome {
    check_winner(board).into()
}
