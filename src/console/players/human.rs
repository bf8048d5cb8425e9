//! Human player reading moves from a line-oriented input.

use super::Player;
use crate::games::tictactoe::{Game, Position};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const MOVE_PROMPT: &str = "Where would you like to move? [1 - 9] ";
const INVALID: &str = "Invalid. ";

/// Human player typing move numbers 1-9.
pub struct HumanPlayer<R> {
    name: String,
    input: R,
}

impl<R: BufRead> HumanPlayer<R> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

impl<R: BufRead> Player for HumanPlayer<R> {
    fn choose_move(&mut self, game: &Game, out: &mut dyn Write) -> Result<Position> {
        let board = game.state().board();

        write!(out, "{}", MOVE_PROMPT)?;
        out.flush()?;

        loop {
            let line = read_line(&mut self.input)?;
            writeln!(out)?;

            match Position::from_move_number(&line) {
                Some(pos) if board.is_empty(pos) => {
                    info!(player = %self.name, position = %pos, "Human chose position");
                    return Ok(pos);
                }
                _ => {
                    debug!(input = %line.trim(), "Rejected move input");
                    write!(out, "{}", INVALID)?;
                    out.flush()?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Reads one line, failing once the input is exhausted.
///
/// Bytes that are not UTF-8 are replaced rather than rejected, so garbage
/// input reaches the caller's validation like any other bad answer.
pub fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        anyhow::bail!("input closed");
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;
    use std::io::Cursor;

    #[test]
    fn test_reprompts_until_valid() {
        let mut game = Game::new(Mark::Ai);
        game.make_move(Position::Center).unwrap();

        let input = Cursor::new("abc\n0\n10\n5\n 7 \n");
        let mut human = HumanPlayer::new("Human", input);
        let mut out = Vec::new();

        let pos = human.choose_move(&game, &mut out).unwrap();
        assert_eq!(pos, Position::BottomLeft);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(MOVE_PROMPT));
        assert_eq!(text.matches(INVALID).count(), 4);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let game = Game::new(Mark::Human);
        let mut human = HumanPlayer::new("Human", Cursor::new("x\n"));
        let mut out = Vec::new();

        let err = human.choose_move(&game, &mut out).unwrap_err();
        assert_eq!(err.to_string(), "input closed");
    }

    #[test]
    fn test_non_utf8_input_is_rejected_as_a_move() {
        let game = Game::new(Mark::Human);
        let input = Cursor::new(&b"\xff\xfe\n\xc3\n3\n"[..]);
        let mut human = HumanPlayer::new("Human", input);
        let mut out = Vec::new();

        let pos = human.choose_move(&game, &mut out).unwrap();
        assert_eq!(pos, Position::TopRight);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(INVALID).count(), 2);
    }
}
