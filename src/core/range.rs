//! Inclusive number range the game iterates over.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// An inclusive range `low..=high` with `low <= high`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberRange {
    low: i64,
    high: i64,
}

impl NumberRange {
    /// Create a range, rejecting `low > high`.
    pub fn new(low: i64, high: i64) -> Result<Self> {
        if low > high {
            return Err(GameError::Range { low, high });
        }
        Ok(Self { low, high })
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub const fn low(self) -> i64 {
        self.low
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub const fn high(self) -> i64 {
        self.high
    }

    /// Number of integers in the range.
    ///
    /// `u128` because the full `i64` range holds 2^64 numbers.
    #[must_use]
    pub fn count(self) -> u128 {
        u128::from(self.high.abs_diff(self.low)) + 1
    }

    /// Check if a number lies inside the range.
    #[must_use]
    pub fn contains(self, number: i64) -> bool {
        (self.low..=self.high).contains(&number)
    }

    /// Iterate ascending over the range.
    pub fn iter(self) -> std::ops::RangeInclusive<i64> {
        self.low..=self.high
    }
}

impl Default for NumberRange {
    fn default() -> Self {
        Self { low: 1, high: 10 }
    }
}

impl std::fmt::Display for NumberRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}–{}", self.low, self.high)
    }
}
