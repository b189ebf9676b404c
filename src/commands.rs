//! Command implementations, writing to any output sink.

use acme_fizzbuzz::round;
use acme_tictactoe::{Coordinate, TicTacToe};
use anyhow::{Context, Result, bail};
use std::io::Write;
use tracing::{info, instrument};

/// Writes the labels for `start..=end`, one per line or as a JSON array.
#[instrument(skip(out))]
pub fn fizzbuzz(start: i64, end: i64, json: bool, out: &mut impl Write) -> Result<()> {
    if start > end {
        bail!("start ({}) must not exceed end ({})", start, end);
    }

    let labels = round(start..=end);
    info!(remaining = ?labels.remaining(), "Playing round");

    if json {
        let labels: Vec<String> = labels.map(|l| l.to_string()).collect();
        serde_json::to_writer(&mut *out, &labels).context("Failed to encode labels")?;
        writeln!(out)?;
    } else {
        for label in labels {
            writeln!(out, "{}", label)?;
        }
    }
    Ok(())
}

/// Applies `moves` to a fresh board and writes the result.
///
/// Stops at the first refused move.
#[instrument(skip(out))]
pub fn tictactoe(moves: &[Coordinate], json: bool, out: &mut impl Write) -> Result<TicTacToe> {
    let mut game = TicTacToe::new();

    for (turn, at) in moves.iter().enumerate() {
        game.play_at(*at)
            .with_context(|| format!("Move {} at {} refused", turn + 1, at))?;
    }
    info!(moves = moves.len(), next = %game.to_move(), "Moves applied");

    if json {
        serde_json::to_writer(&mut *out, &game.board().grid())
            .context("Failed to encode board")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", game.board())?;
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col).expect("on the board")
    }

    #[test]
    fn test_fizzbuzz_lines() {
        let mut out = Vec::new();
        fizzbuzz(1, 5, false, &mut out).expect("valid range");
        assert_eq!(String::from_utf8(out).expect("utf8"), "1\n2\nFizz\n4\nBuzz\n");
    }

    #[test]
    fn test_fizzbuzz_json() {
        let mut out = Vec::new();
        fizzbuzz(14, 16, true, &mut out).expect("valid range");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "[\"14\",\"Fizz Buzz\",\"16\"]\n"
        );
    }

    #[test]
    fn test_fizzbuzz_inverted_range() {
        let mut out = Vec::new();
        assert!(fizzbuzz(5, 1, false, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_tictactoe_text() {
        let mut out = Vec::new();
        let game = tictactoe(&[at(0, 0), at(1, 1)], false, &mut out).expect("legal moves");
        assert_eq!(game.history().len(), 2);
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "X|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|.\n"
        );
    }

    #[test]
    fn test_tictactoe_json() {
        let mut out = Vec::new();
        tictactoe(&[at(0, 0)], true, &mut out).expect("legal move");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "[[\"X\",\" \",\" \"],[\" \",\" \",\" \"],[\" \",\" \",\" \"]]\n"
        );
    }

    #[test]
    fn test_tictactoe_refused_move() {
        let mut out = Vec::new();
        let err = tictactoe(&[at(0, 0), at(0, 0)], false, &mut out).expect_err("taken");
        assert!(err.to_string().contains("Move 2 at (0, 0) refused"));
        assert!(out.is_empty());
    }
}
