//! Validation of values typed in by a user before they reach the [`Tree`](crate::Tree).
//!
//! Insertion only accepts values in a configured inclusive range (`1..=999` by
//! default). Deletion accepts any integer: deleting something that isn't in the tree
//! is a normal outcome reported by [`Tree::delete`](crate::Tree::delete), not an error.
//!
//! # Examples
//!
//! ```
//! use bst_engine::{Error, InputRange};
//!
//! let range = InputRange::default();
//!
//! assert_eq!(range.parse_insert(" 42 "), Ok(42));
//! assert_eq!(
//!     range.parse_insert("1000"),
//!     Err(Error::OutOfRange { value: 1000, min: 1, max: 999 })
//! );
//! assert_eq!(range.parse_delete("-7"), Ok(-7));
//! ```

use tracing::trace;

use crate::errors::{Error, Result};

/// Smallest value accepted for insertion by default.
pub const DEFAULT_MIN: i32 = 1;
/// Largest value accepted for insertion by default.
pub const DEFAULT_MAX: i32 = 999;

/// The inclusive range of values a user may insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputRange {
    min: i32,
    max: i32,
}

impl Default for InputRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl InputRange {
    /// Builds a range accepting `min..=max`. Fails if `min > max`.
    pub fn new(min: i32, max: i32) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Smallest accepted value.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Largest accepted value.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Whether `value` may be inserted.
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Parses a value to insert. Surrounding whitespace is ignored; anything else that
    /// isn't a plain integer inside the range is rejected.
    pub fn parse_insert(&self, raw: &str) -> Result<i32> {
        let value = parse_integer(raw)?;
        if !self.contains(value) {
            trace!(value, min = self.min, max = self.max, "rejected out of range insert");
            return Err(Error::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }

    /// Parses a value to delete. Any integer is accepted.
    pub fn parse_delete(&self, raw: &str) -> Result<i32> {
        parse_integer(raw)
    }
}

fn parse_integer(raw: &str) -> Result<i32> {
    raw.trim().parse().map_err(|_| Error::NotANumber {
        input: raw.to_string(),
    })
}
