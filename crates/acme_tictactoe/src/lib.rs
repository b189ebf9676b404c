//! Tic-tac-toe board skeleton.
//!
//! A [`TicTacToe`] owns a 3x3 [`Board`] and places the current player's
//! mark wherever it is told. `X` always moves first and the players
//! alternate. The board never decides a winner.
//!
//! # Example
//!
//! ```
//! use acme_tictactoe::TicTacToe;
//!
//! let mut game = TicTacToe::new();
//! game.play(0, 0)?;
//! assert_eq!(game.board()[0][0], 'X');
//! # Ok::<(), acme_tictactoe::PlayError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod coordinate;
mod game;
pub mod invariants;
mod types;

pub use action::{Move, PlayError};
pub use coordinate::{Coordinate, CoordinateError, CoordinateParseError, SIZE};
pub use game::TicTacToe;
pub use types::{Board, Player, Square};
