//! A round of FizzBuzz: the labels for consecutive numbers.

use super::Label;
use tracing::{debug, instrument};

/// Iterator over the labels of an inclusive range of numbers.
#[derive(Debug, Clone)]
pub struct Round {
    next: i64,
    end: i64,
    exhausted: bool,
}

/// Starts a round covering every number in `range`, in order.
#[instrument]
pub fn round(range: std::ops::RangeInclusive<i64>) -> Round {
    let (start, end) = range.into_inner();
    debug!(start, end, "Starting round");
    Round {
        next: start,
        end,
        exhausted: start > end,
    }
}

impl Round {
    /// Renders the remaining labels joined by `separator`.
    pub fn join(self, separator: &str) -> String {
        self.map(|label| label.to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Labels left to yield, `None` when the count does not fit in `usize`.
    pub fn remaining(&self) -> Option<usize> {
        if self.exhausted {
            return Some(0);
        }
        let span = i128::from(self.end) - i128::from(self.next) + 1;
        usize::try_from(span).ok()
    }
}

impl Iterator for Round {
    type Item = Label;

    fn next(&mut self) -> Option<Label> {
        if self.exhausted {
            return None;
        }
        let label = Label::of(self.next);
        // `end` may be i64::MAX, so stop before incrementing past it.
        if self.next == self.end {
            self.exhausted = true;
        } else {
            self.next += 1;
        }
        Some(label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for Round {}
