//! Core domain types for tic-tac-toe.

use super::coordinate::{Coordinate, SIZE};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum Player {
    /// Player X (goes first).
    #[default]
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark this player writes on the board.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character form: `'X'`, `'O'`, or `' '` when empty.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(player) => player.symbol(),
        }
    }

    /// The occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

impl PartialEq<char> for Square {
    fn eq(&self, other: &char) -> bool {
        self.symbol() == *other
    }
}

/// 3x3 tic-tac-toe board, indexed `board[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    rows: [[Square; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given coordinate.
    pub fn get(&self, at: Coordinate) -> Square {
        self.rows[at.row()][at.col()]
    }

    /// Sets the square at the given coordinate.
    pub(crate) fn set(&mut self, at: Coordinate, square: Square) {
        self.rows[at.row()][at.col()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, at: Coordinate) -> bool {
        self.get(at) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares().all(|s| s != Square::Empty)
    }

    /// Rows of squares.
    pub fn rows(&self) -> &[[Square; SIZE]; SIZE] {
        &self.rows
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares()
            .filter(|s| *s == Square::Occupied(player))
            .count()
    }

    /// Coordinates still open for a move, in row-major order.
    #[instrument(skip(self))]
    pub fn empty_squares(&self) -> Vec<Coordinate> {
        Coordinate::all().filter(|at| self.is_empty(*at)).collect()
    }

    /// Character grid, `' '` for empty squares.
    pub fn grid(&self) -> [[char; SIZE]; SIZE] {
        self.rows.map(|row| row.map(Square::symbol))
    }
}

impl std::ops::Index<usize> for Board {
    type Output = [Square; SIZE];

    fn index(&self, row: usize) -> &Self::Output {
        &self.rows[row]
    }
}

impl std::ops::Index<Coordinate> for Board {
    type Output = Square;

    fn index(&self, at: Coordinate) -> &Self::Output {
        &self.rows[at.row()][at.col()]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|sq| match sq {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(p) => p.symbol().to_string(),
                })
                .collect();
            write!(f, "{}", cells.join("|"))?;
            if r + 1 < SIZE {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
