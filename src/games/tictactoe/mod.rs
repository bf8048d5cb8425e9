//! Tic-tac-toe: board, rules, game state and minimax search.

mod action;
mod game;
mod position;
pub mod rules;
mod search;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use position::Position;
pub use rules::{Outcome, evaluate};
pub use search::{SearchResult, Searcher, search, search_pruned};
pub use types::{Board, GameState, GameStatus, Mark, Square};
