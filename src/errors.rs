//! Errors raised while turning user input into engine calls. The engine itself never
//! fails: duplicates, misses and empty trees are ordinary return values.

use thiserror::Error;

/// Errors produced by the [`input`](crate::input) layer and by parsing an
/// [`Order`](crate::Order) from its name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The text is not a base-10 integer.
    #[error("not a valid number: {input:?}")]
    NotANumber {
        /// The offending input, as given.
        input: String,
    },

    /// The value parsed but is outside the accepted insertion range.
    #[error("{value} is outside the accepted range {min}-{max}")]
    OutOfRange {
        /// The parsed value.
        value: i32,
        /// Smallest accepted value.
        min: i32,
        /// Largest accepted value.
        max: i32,
    },

    /// A range was configured with its bounds the wrong way round.
    #[error("invalid input range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Requested lower bound.
        min: i32,
        /// Requested upper bound.
        max: i32,
    },

    /// No traversal order goes by this name.
    #[error("unknown traversal order: {0:?}")]
    UnknownOrder(String),
}

/// Shorthand for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;
