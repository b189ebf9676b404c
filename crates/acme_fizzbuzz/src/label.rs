//! Label type and the divisibility rules that produce it.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What a player says for a given number.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIs,
)]
pub enum Label {
    /// Neither a multiple of 3 nor of 5; said as-is.
    #[display("{}", _0)]
    Number(i64),
    /// Multiple of 3 only.
    #[display("Fizz")]
    Fizz,
    /// Multiple of 5 only.
    #[display("Buzz")]
    Buzz,
    /// Multiple of both 3 and 5.
    #[display("Fizz Buzz")]
    FizzBuzz,
}

impl Label {
    /// Classifies `n` by divisibility.
    ///
    /// The rules apply to every integer: `0` is a multiple of 15 and
    /// negative numbers follow their absolute value.
    #[instrument]
    pub fn of(n: i64) -> Self {
        match (n % 3 == 0, n % 5 == 0) {
            (true, true) => Label::FizzBuzz,
            (true, false) => Label::Fizz,
            (false, true) => Label::Buzz,
            (false, false) => Label::Number(n),
        }
    }

    /// Returns the number for [`Label::Number`], `None` for the words.
    pub fn number(self) -> Option<i64> {
        match self {
            Label::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl From<i64> for Label {
    fn from(n: i64) -> Self {
        Self::of(n)
    }
}

/// Returns the display label for `n`.
///
/// Equivalent to `Label::of(n).to_string()`.
#[instrument]
pub fn compute(n: i64) -> String {
    Label::of(n).to_string()
}
