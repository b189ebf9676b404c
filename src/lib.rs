//! Acme Katas - FizzBuzz and tic-tac-toe.
//!
//! The game logic lives in the `acme_fizzbuzz` and `acme_tictactoe`
//! crates; this crate re-exports them and adds configuration and the
//! command implementations behind the `acme_katas` binary.
//!
//! # Example
//!
//! ```
//! use acme_katas::{compute, TicTacToe};
//!
//! assert_eq!(compute(9), "Fizz");
//!
//! let mut game = TicTacToe::new();
//! game.play(0, 0)?;
//! assert_eq!(game.board()[0][0], 'X');
//! # Ok::<(), acme_katas::PlayError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod commands;
mod config;

// Crate-level exports - Configuration
pub use config::{ConfigError, FizzBuzzConfig, KataConfig};

// Crate-level exports - FizzBuzz
pub use acme_fizzbuzz::{Label, Round, compute, round};

// Crate-level exports - Tic-tac-toe
pub use acme_tictactoe::{
    Board, Coordinate, CoordinateError, Move, PlayError, Player, Square, TicTacToe,
};
