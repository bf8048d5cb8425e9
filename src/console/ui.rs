//! Text rendering for the console game.

use crate::games::tictactoe::{Board, GameStatus, Mark};
use std::io::{self, Write};

/// Writes the opening banner.
pub fn write_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Tic-tac-toe")?;
    writeln!(out, "\twith the minimax algorithm")?;
    writeln!(out, "Human: {}", Mark::Human.symbol())?;
    writeln!(out, "Machine: {}", Mark::Ai.symbol())?;
    writeln!(out, "-----------------------------------")
}

/// Writes the board framed by blank lines.
pub fn write_board(out: &mut impl Write, board: &Board) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", board)?;
    writeln!(out)
}

/// Line announcing how the game ended.
pub fn result_line(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Won(Mark::Ai) => "AI win.",
        GameStatus::Won(Mark::Human) => "HUMAN win.",
        GameStatus::Draw => "Draw.",
        GameStatus::InProgress => "Game in progress.",
    }
}
