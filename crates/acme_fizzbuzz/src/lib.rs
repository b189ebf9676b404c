//! FizzBuzz - the number-to-label exercise.
//!
//! Every integer maps to exactly one [`Label`]:
//!
//! - multiples of 15 become `"Fizz Buzz"`
//! - other multiples of 3 become `"Fizz"`
//! - other multiples of 5 become `"Buzz"`
//! - everything else is printed as its decimal value
//!
//! # Example
//!
//! ```
//! use acme_fizzbuzz::{compute, round};
//!
//! assert_eq!(compute(15), "Fizz Buzz");
//! assert_eq!(round(1..=5).join(", "), "1, 2, Fizz, 4, Buzz");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod label;
mod round;

pub use label::{Label, compute};
pub use round::{Round, round};
