//! Invariants every board must satisfy between moves.
//!
//! They are checked after each move in debug builds and can be tested
//! independently.

use super::{Player, Square, TicTacToe};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// X moves first and players alternate, so X leads O by zero or one mark.
pub struct MarkBalanceInvariant;

impl Invariant<TicTacToe> for MarkBalanceInvariant {
    fn holds(game: &TicTacToe) -> bool {
        let board = game.board();
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        let valid = x == o || x == o + 1;
        if !valid {
            warn!(x, o, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X leads O by zero or one mark"
    }
}

/// History replays exactly onto the board.
pub struct HistoryConsistentInvariant;

impl Invariant<TicTacToe> for HistoryConsistentInvariant {
    fn holds(game: &TicTacToe) -> bool {
        let board = game.board();
        let filled = board.squares().filter(|s| *s != Square::Empty).count();
        let history = game.history();

        let marks_match = history
            .iter()
            .all(|mv| board.get(mv.at) == Square::Occupied(mv.player));

        let valid = marks_match && filled == history.len();
        if !valid {
            warn!(filled, history_len = history.len(), "History consistency violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Every recorded move is on the board and nothing else is"
    }
}

/// Checks every board invariant, collecting all violations.
pub fn check(game: &TicTacToe) -> Result<(), Vec<InvariantViolation>> {
    let results = [
        (MarkBalanceInvariant::holds(game), MarkBalanceInvariant::description()),
        (
            HistoryConsistentInvariant::holds(game),
            HistoryConsistentInvariant::description(),
        ),
    ];

    let violations: Vec<_> = results
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, Move};

    #[test]
    fn test_invariants_hold_for_new_game() {
        let game = TicTacToe::new();
        assert!(check(&game).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_moves() {
        let mut game = TicTacToe::new();
        for (row, col) in [(0, 0), (1, 1), (2, 2), (0, 2)] {
            game.play(row, col).expect("legal move");
        }
        assert!(check(&game).is_ok());
    }

    #[test]
    fn test_detects_extra_mark() {
        let mut game = TicTacToe::new();
        game.play(0, 0).expect("legal move");
        let at = Coordinate::new(2, 2).expect("on the board");
        game.board.set(at, Square::Occupied(Player::X));

        let violations = check(&game).expect_err("corrupted board");
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, MarkBalanceInvariant::description());
        assert_eq!(
            violations[1].description,
            HistoryConsistentInvariant::description()
        );
    }

    #[test]
    fn test_detects_history_mismatch() {
        let mut game = TicTacToe::new();
        game.play(1, 1).expect("legal move");
        let elsewhere = Coordinate::new(0, 1).expect("on the board");
        game.history[0] = Move::new(Player::X, elsewhere);

        assert!(MarkBalanceInvariant::holds(&game));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
