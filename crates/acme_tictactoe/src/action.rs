//! Moves and the ways a move can be refused.

use super::coordinate::{Coordinate, CoordinateError};
use super::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A placed mark: which player wrote where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who moved.
    pub player: Player,
    /// Where the mark went.
    pub at: Coordinate,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, at: Coordinate) -> Self {
        Self { player, at }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.at)
    }
}

/// Error returned by [`crate::TicTacToe::play`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlayError {
    /// Row or column outside `0..3`.
    #[display("Coordinate ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Coordinate),

    /// A board invariant failed after the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for PlayError {}

impl From<CoordinateError> for PlayError {
    fn from(err: CoordinateError) -> Self {
        PlayError::OutOfBounds {
            row: err.row,
            col: err.col,
        }
    }
}
