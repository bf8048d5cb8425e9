//! Exhaustive minimax search with optional alpha-beta pruning.
//!
//! Payoffs are always from the Ai's side: +1 Ai wins, -1 human wins,
//! 0 draw. The Ai maximizes and the human minimizes.
//!
//! The unpruned walk reports the *last* cell (in index order) whose
//! payoff matches the running best, so later ties overwrite earlier ones.
//! The pruned walk only takes a cell on a strict improvement: a cut-off
//! branch returns a bound rather than an exact value, and letting a bound
//! tie the best could report a losing move. Both walks return the same
//! payoff for every position.

use super::rules::check_winner;
use super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Sentinel strictly outside the payoff range.
const INF: i8 = 2;

/// Outcome of a search from one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best move for the side to move, `None` at terminal positions.
    pub best_move: Option<Position>,
    /// Game-theoretic payoff of the position.
    pub payoff: i8,
    /// Positions visited, the root included.
    pub nodes: u64,
}

/// Minimax search engine.
///
/// Holds no state between calls; every search works on its own copy of
/// the caller's board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Searcher {
    pruning: bool,
}

impl Searcher {
    /// Creates a searcher, with alpha-beta pruning when `pruning` is set.
    pub fn new(pruning: bool) -> Self {
        Self { pruning }
    }

    /// Whether alpha-beta pruning is enabled.
    pub fn pruning(&self) -> bool {
        self.pruning
    }

    /// Searches `board` with `to_move` to play.
    ///
    /// `empty_cells` must equal the number of empty squares on `board`; the
    /// search counts down from it instead of rescanning the board, so a
    /// wrong count ends the search early or lets it run past a full board.
    #[instrument(skip(self, board), fields(pruning = self.pruning))]
    pub fn search(&self, board: &Board, to_move: Mark, empty_cells: usize) -> SearchResult {
        let mut walk = Walk {
            board: *board,
            nodes: 0,
        };
        let (best_move, payoff) = if self.pruning {
            walk.alpha_beta(to_move, empty_cells, -INF, INF)
        } else {
            walk.minimax(to_move, empty_cells)
        };

        debug!(?best_move, payoff, nodes = walk.nodes, "Search complete");

        SearchResult {
            best_move,
            payoff,
            nodes: walk.nodes,
        }
    }
}

/// Plain minimax search, reporting the last best move among ties.
pub fn search(board: &Board, to_move: Mark, empty_cells: usize) -> SearchResult {
    Searcher::new(false).search(board, to_move, empty_cells)
}

/// Alpha-beta search, reporting the first best move among ties.
pub fn search_pruned(board: &Board, to_move: Mark, empty_cells: usize) -> SearchResult {
    Searcher::new(true).search(board, to_move, empty_cells)
}

/// Scratch board and counters for one search.
struct Walk {
    board: Board,
    nodes: u64,
}

impl Walk {
    /// Terminal payoff, if the position is over.
    fn terminal(&mut self, empty_cells: usize) -> Option<i8> {
        self.nodes += 1;
        if let Some(winner) = check_winner(&self.board) {
            return Some(winner.payoff());
        }
        if empty_cells == 0 {
            return Some(0);
        }
        None
    }

    fn minimax(&mut self, to_move: Mark, empty_cells: usize) -> (Option<Position>, i8) {
        if let Some(payoff) = self.terminal(empty_cells) {
            return (None, payoff);
        }

        let mut best_move = None;
        let mut best_val = seed(to_move);

        for pos in Position::ALL {
            if !self.board.is_empty(pos) {
                continue;
            }

            self.board.set(pos, Square::Occupied(to_move));
            let (_, branch) = self.minimax(to_move.opponent(), empty_cells - 1);
            self.board.set(pos, Square::Empty);

            best_val = match to_move {
                Mark::Ai => best_val.max(branch),
                Mark::Human => best_val.min(branch),
            };
            if best_val == branch {
                best_move = Some(pos);
            }
        }

        (best_move, best_val)
    }

    fn alpha_beta(
        &mut self,
        to_move: Mark,
        empty_cells: usize,
        mut alpha: i8,
        mut beta: i8,
    ) -> (Option<Position>, i8) {
        if let Some(payoff) = self.terminal(empty_cells) {
            return (None, payoff);
        }

        let mut best_move = None;
        let mut best_val = seed(to_move);

        for pos in Position::ALL {
            if !self.board.is_empty(pos) {
                continue;
            }

            self.board.set(pos, Square::Occupied(to_move));
            let (_, branch) = self.alpha_beta(to_move.opponent(), empty_cells - 1, alpha, beta);
            self.board.set(pos, Square::Empty);

            match to_move {
                Mark::Ai => {
                    if branch > best_val {
                        best_val = branch;
                        best_move = Some(pos);
                    }
                    alpha = alpha.max(best_val);
                }
                Mark::Human => {
                    if branch < best_val {
                        best_val = branch;
                        best_move = Some(pos);
                    }
                    beta = beta.min(best_val);
                }
            }

            if alpha >= beta {
                break;
            }
        }

        (best_move, best_val)
    }
}

/// Starting value for the side to move: the worst possible for it.
fn seed(to_move: Mark) -> i8 {
    match to_move {
        Mark::Ai => -INF,
        Mark::Human => INF,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &str) -> Board {
        let mut squares = [Square::Empty; 9];
        for (square, c) in squares.iter_mut().zip(cells.chars()) {
            *square = match c {
                'X' => Square::Occupied(Mark::Human),
                'O' => Square::Occupied(Mark::Ai),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_won_position_is_terminal() {
        let won = board("OOOXX.X..");
        for searcher in [Searcher::new(false), Searcher::new(true)] {
            let result = searcher.search(&won, Mark::Human, 3);
            assert_eq!(result.best_move, None);
            assert_eq!(result.payoff, 1);
            assert_eq!(result.nodes, 1);
        }
    }

    #[test]
    fn test_full_board_is_draw() {
        let full = board("XOXOXXOXO");
        let result = search(&full, Mark::Ai, 0);
        assert_eq!(result.best_move, None);
        assert_eq!(result.payoff, 0);
    }

    #[test]
    fn test_opening_tie_break_differs_by_variant() {
        // Every opening move draws, so the tie-break alone picks the square.
        let empty = Board::new();
        let unpruned = search(&empty, Mark::Ai, 9);
        let pruned = search_pruned(&empty, Mark::Ai, 9);

        assert_eq!(unpruned.payoff, 0);
        assert_eq!(pruned.payoff, 0);
        assert_eq!(unpruned.best_move, Some(Position::BottomRight));
        assert_eq!(pruned.best_move, Some(Position::TopLeft));
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let empty = Board::new();
        let unpruned = search(&empty, Mark::Human, 9);
        let pruned = search_pruned(&empty, Mark::Human, 9);
        assert_eq!(unpruned.payoff, pruned.payoff);
        assert!(pruned.nodes < unpruned.nodes);
    }

    #[test]
    fn test_human_blocks_ai_line() {
        // O O . / . X . / . . .  Only TopRight holds the draw.
        let position = board("OO..X....");
        for searcher in [Searcher::new(false), Searcher::new(true)] {
            let result = searcher.search(&position, Mark::Human, 6);
            assert_eq!(result.best_move, Some(Position::TopRight));
            assert_eq!(result.payoff, 0);
        }
    }

    #[test]
    fn test_ai_prefers_win_over_block() {
        // X X . / O O . / X . .  Ai can win at MiddleRight or block at TopRight.
        let position = board("XX.OO.X..");
        for searcher in [Searcher::new(false), Searcher::new(true)] {
            let result = searcher.search(&position, Mark::Ai, 4);
            assert_eq!(result.best_move, Some(Position::MiddleRight));
            assert_eq!(result.payoff, 1);
        }
    }
}
