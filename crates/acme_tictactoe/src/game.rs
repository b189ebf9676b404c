//! The mutable game object.

use super::action::{Move, PlayError};
use super::coordinate::Coordinate;
use super::types::{Board, Player, Square};
use tracing::{debug, instrument};

/// A tic-tac-toe board that places the current player's mark on request.
///
/// `X` moves first; after every accepted move the turn passes to the
/// opponent. Refused moves leave the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TicTacToe {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) history: Vec<Move>,
}

impl TicTacToe {
    /// Creates a game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Returns the player who moved.
    ///
    /// # Errors
    ///
    /// - [`PlayError::OutOfBounds`] if `row` or `col` is not in `0..3`.
    /// - [`PlayError::SquareOccupied`] if the square already holds a mark.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<Player, PlayError> {
        let at = Coordinate::new(row, col)?;

        if !self.board.is_empty(at) {
            debug!(%at, "Square already occupied");
            return Err(PlayError::SquareOccupied(at));
        }

        let player = self.to_move;
        let mut next = self.clone();
        next.board.set(at, Square::Occupied(player));
        next.history.push(Move::new(player, at));
        next.to_move = player.opponent();

        // Checked before committing so a violation leaves `self` untouched.
        #[cfg(debug_assertions)]
        super::invariants::check(&next).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            PlayError::InvariantViolation(descriptions)
        })?;

        *self = next;
        debug!(%at, next = %self.to_move, "Mark placed");
        Ok(player)
    }

    /// Places the current player's mark at a pre-validated coordinate.
    pub fn play_at(&mut self, at: Coordinate) -> Result<Player, PlayError> {
        self.play(at.row(), at.col())
    }

    /// Returns the board for inspection, indexed `[row][col]`.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next move places.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the moves accepted so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}
