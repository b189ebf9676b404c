//! Row/column addressing for the 3x3 grid.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const SIZE: usize = 3;

/// A validated `(row, col)` pair, both in `0..SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "RawCoordinate")]
#[display("({}, {})", row, col)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

#[derive(Deserialize)]
struct RawCoordinate {
    row: usize,
    col: usize,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CoordinateError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.row, raw.col)
    }
}

/// A row or column fell outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Coordinate ({}, {}) is off the board (rows and columns run 0-2)", row, col)]
pub struct CoordinateError {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
}

impl Coordinate {
    /// Validates and builds a coordinate.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, CoordinateError> {
        if row >= SIZE || col >= SIZE {
            return Err(CoordinateError { row, col });
        }
        Ok(Self { row, col })
    }

    /// Row index.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index.
    pub fn col(self) -> usize {
        self.col
    }

    /// Every coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Coordinate { row, col }))
    }
}

impl std::str::FromStr for Coordinate {
    type Err = CoordinateParseError;

    /// Parses `"row,col"`, e.g. `"0,2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| CoordinateParseError::new(s))?;
        let row = row.trim().parse().map_err(|_| CoordinateParseError::new(s))?;
        let col = col.trim().parse().map_err(|_| CoordinateParseError::new(s))?;
        Ok(Self::new(row, col)?)
    }
}

/// Text could not be read as a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CoordinateParseError {
    /// Not of the form `row,col` with two unsigned integers.
    #[display("Expected 'row,col' but got '{}'", _0)]
    Malformed(String),
    /// Well-formed but off the board.
    #[display("{}", _0)]
    OutOfBounds(CoordinateError),
}

impl CoordinateParseError {
    fn new(input: &str) -> Self {
        Self::Malformed(input.to_string())
    }
}

impl From<CoordinateError> for CoordinateParseError {
    fn from(err: CoordinateError) -> Self {
        Self::OutOfBounds(err)
    }
}

impl std::error::Error for CoordinateParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_are_valid() {
        assert!(Coordinate::new(0, 0).is_ok());
        assert!(Coordinate::new(2, 2).is_ok());
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        assert_eq!(
            Coordinate::new(3, 0),
            Err(CoordinateError { row: 3, col: 0 })
        );
        assert!(Coordinate::new(0, 7).is_err());
    }

    #[test]
    fn test_all_is_row_major() {
        let all: Vec<_> = Coordinate::all().map(|c| (c.row(), c.col())).collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], (0, 0));
        assert_eq!(all[1], (0, 1));
        assert_eq!(all[3], (1, 0));
        assert_eq!(all[8], (2, 2));
    }

    #[test]
    fn test_parse() {
        let c: Coordinate = "1, 2".parse().expect("valid coordinate");
        assert_eq!((c.row(), c.col()), (1, 2));
        assert!(matches!(
            "12".parse::<Coordinate>(),
            Err(CoordinateParseError::Malformed(_))
        ));
        assert!(matches!(
            "a,b".parse::<Coordinate>(),
            Err(CoordinateParseError::Malformed(_))
        ));
        assert!(matches!(
            "0,3".parse::<Coordinate>(),
            Err(CoordinateParseError::OutOfBounds(_))
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Coordinate = serde_json::from_str(r#"{"row":2,"col":1}"#).expect("on the board");
        assert_eq!(ok, Coordinate::new(2, 1).expect("on the board"));
        assert!(serde_json::from_str::<Coordinate>(r#"{"row":3,"col":1}"#).is_err());
    }
}
