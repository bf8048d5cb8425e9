//! Strictly Minimax - tic-tac-toe against an exhaustive minimax opponent
//!
//! # Architecture
//!
//! - **Games**: board, rules, outcome evaluation and the minimax search
//! - **Console**: prompts, rendering, screen clearing and the game loop
//! - **Config**: TOML settings for a run
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Mark, Position, Square, search};
//!
//! let mut board = Board::new();
//! board.set(Position::TopLeft, Square::Occupied(Mark::Ai));
//! board.set(Position::TopCenter, Square::Occupied(Mark::Ai));
//! board.set(Position::MiddleLeft, Square::Occupied(Mark::Human));
//! board.set(Position::Center, Square::Occupied(Mark::Human));
//!
//! let result = search(&board, Mark::Ai, board.empty_count());
//! assert_eq!(result.best_move, Some(Position::TopRight));
//! assert_eq!(result.payoff, 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ClearScreen, ConfigError, FirstPlayer, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GameState, GameStatus, Mark, Move, MoveError, Outcome, Position, SearchResult,
    Searcher, Square, evaluate, rules, search, search_pruned,
};
