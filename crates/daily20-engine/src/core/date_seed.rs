use std::{fmt, str::FromStr};

use chrono::{Datelike as _, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::InvalidDateError;

/// Format of a canonical puzzle date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Seed for the daily number stream, derived from the puzzle date.
///
/// The seed is the date's digits read as a decimal integer, so `2025-01-29`
/// becomes `20250129`. Only the calendar date takes part; callers are expected
/// to pick the date in UTC so every player shares the same puzzle.
///
/// # Example
///
/// ```
/// use daily20_engine::DateSeed;
///
/// let seed: DateSeed = "2025-01-29".parse()?;
/// assert_eq!(seed.value(), 20_250_129);
/// # Ok::<(), daily20_engine::InvalidDateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateSeed(u32);

impl DateSeed {
    /// Derives the seed from a calendar date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        // Years outside 0..=9999 are not puzzle dates; clamp keeps the arithmetic in range.
        let year = date.year().clamp(0, 9999).unsigned_abs();
        Self(year * 10_000 + date.month() * 100 + date.day())
    }

    /// Creates a seed from a raw value, bypassing date parsing.
    #[must_use]
    pub const fn from_raw(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for DateSeed {
    type Err = InvalidDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = parse_puzzle_date(s)?;
        let seed = Self::from_date(date);
        tracing::debug!(date = s, seed = seed.0, "derived date seed");
        Ok(seed)
    }
}

impl fmt::Display for DateSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a canonical `YYYY-MM-DD` puzzle date.
///
/// Only the zero-padded ISO form is accepted; `2025-1-29` or `2025/01/29` are rejected
/// so that one calendar day always maps to one string.
pub fn parse_puzzle_date(s: &str) -> Result<NaiveDate, InvalidDateError> {
    let is_canonical = s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !is_canonical {
        return Err(InvalidDateError::new(s));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| InvalidDateError::new(s))
}
