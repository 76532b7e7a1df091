use std::{collections::HashSet, ops::Deref};

use serde::{Deserialize, Serialize};

use crate::{DateSeed, GenerateError, Mulberry32};

/// Shape of a generated sequence: how many numbers, drawn from which inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceParams {
    pub count: usize,
    pub min: u16,
    pub max: u16,
}

impl SequenceParams {
    /// The daily puzzle: 20 numbers from 1 to 999.
    pub const DAILY: Self = Self {
        count: 20,
        min: 1,
        max: 999,
    };

    /// Number of distinct values in `[min, max]` (zero when `min > max`).
    #[must_use]
    pub fn range_size(&self) -> usize {
        if self.min > self.max {
            return 0;
        }
        usize::from(self.max - self.min) + 1
    }

    fn validate(&self) -> Result<(), GenerateError> {
        if self.count == 0 {
            return Err(GenerateError::EmptySequence);
        }
        if self.range_size() < self.count {
            return Err(GenerateError::RangeTooSmall {
                count: self.count,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for SequenceParams {
    fn default() -> Self {
        Self::DAILY
    }
}

/// Distinct numbers in reveal order.
///
/// A sequence is only built by [`Self::generate`] (or deserialized), so its
/// elements are always pairwise distinct.
///
/// # Example
///
/// ```
/// use daily20_engine::{NumberSequence, SequenceParams};
///
/// let a = NumberSequence::generate_for_date("2026-10-18", SequenceParams::DAILY)?;
/// let b = NumberSequence::generate_for_date("2026-10-18", SequenceParams::DAILY)?;
/// assert_eq!(a, b);
/// assert!(a.iter().all(|n| (1..=999).contains(n)));
/// # Ok::<(), daily20_engine::GenerateError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u16>", into = "Vec<u16>")]
pub struct NumberSequence(Vec<u16>);

impl NumberSequence {
    /// Draws `params.count` distinct numbers from a stream seeded with `seed`.
    ///
    /// Values are drawn one at a time and kept in first-seen order; repeats are
    /// skipped but still advance the stream.
    pub fn generate(seed: DateSeed, params: SequenceParams) -> Result<Self, GenerateError> {
        params.validate()?;

        let mut rng = Mulberry32::from_date_seed(seed);
        let mut seen = HashSet::with_capacity(params.count);
        let mut numbers = Vec::with_capacity(params.count);
        let mut draws = 0_usize;
        while numbers.len() < params.count {
            let n = rng.next_in_range(params.min, params.max);
            draws += 1;
            if seen.insert(n) {
                numbers.push(n);
            }
        }

        tracing::debug!(
            seed = seed.value(),
            count = params.count,
            draws,
            "generated number sequence"
        );
        Ok(Self(numbers))
    }

    /// Like [`Self::generate`], deriving the seed from a `YYYY-MM-DD` date string.
    pub fn generate_for_date(date: &str, params: SequenceParams) -> Result<Self, GenerateError> {
        let seed = date.parse::<DateSeed>()?;
        Self::generate(seed, params)
    }

    /// Numbers sorted ascending: the ideal left-to-right placement.
    #[must_use]
    pub fn sorted(&self) -> Vec<u16> {
        let mut sorted = self.0.clone();
        sorted.sort_unstable();
        sorted
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u16] {
        &self.0
    }
}

impl Deref for NumberSequence {
    type Target = [u16];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Vec<u16>> for NumberSequence {
    type Error = DuplicateNumberError;

    fn try_from(numbers: Vec<u16>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(numbers.len());
        if let Some(&dup) = numbers.iter().find(|n| !seen.insert(**n)) {
            return Err(DuplicateNumberError(dup));
        }
        Ok(Self(numbers))
    }
}

impl From<NumberSequence> for Vec<u16> {
    fn from(sequence: NumberSequence) -> Self {
        sequence.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("number {_0} appears more than once")]
pub struct DuplicateNumberError(#[error(not(source))] pub u16);

#[cfg(test)]
mod tests {
    use super::*;

    const GOLDEN_2025_01_29: [u16; 20] = [
        954, 674, 724, 15, 671, 714, 948, 321, 147, 824, 376, 410, 415, 972, 315, 876, 182, 68,
        161, 822,
    ];

    #[test]
    fn test_golden_daily_sequence() {
        let seq = NumberSequence::generate_for_date("2025-01-29", SequenceParams::DAILY).unwrap();
        assert_eq!(seq.as_slice(), GOLDEN_2025_01_29);
    }

    #[test]
    fn test_golden_next_day() {
        let seq = NumberSequence::generate_for_date("2025-01-30", SequenceParams::DAILY).unwrap();
        assert_eq!(&seq[..5], [695, 282, 978, 537, 549]);
    }

    #[test]
    fn test_deterministic() {
        for date in ["2025-01-29", "2026-10-18", "2030-06-01"] {
            let a = NumberSequence::generate_for_date(date, SequenceParams::DAILY).unwrap();
            let b = NumberSequence::generate_for_date(date, SequenceParams::DAILY).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_distinct_and_in_range() {
        for raw in 20_250_101..20_250_131 {
            let seq = NumberSequence::generate(DateSeed::from_raw(raw), SequenceParams::DAILY)
                .unwrap();
            assert_eq!(seq.len(), 20);
            assert!(seq.iter().all(|n| (1..=999).contains(n)));
            let unique = seq.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), seq.len());
        }
    }

    #[test]
    fn test_range_exactly_count_uses_every_value() {
        let params = SequenceParams {
            count: 10,
            min: 1,
            max: 10,
        };
        let seq = NumberSequence::generate(DateSeed::from_raw(1), params).unwrap();
        assert_eq!(seq.sorted(), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_range_too_small() {
        let params = SequenceParams {
            count: 1000,
            ..SequenceParams::DAILY
        };
        let err = NumberSequence::generate_for_date("2025-01-29", params).unwrap_err();
        assert_eq!(
            err,
            GenerateError::RangeTooSmall {
                count: 1000,
                min: 1,
                max: 999
            }
        );
    }

    #[test]
    fn test_inverted_range_is_too_small() {
        let params = SequenceParams {
            count: 1,
            min: 10,
            max: 5,
        };
        let err = NumberSequence::generate(DateSeed::from_raw(1), params).unwrap_err();
        assert!(err.is_range_too_small());
    }

    #[test]
    fn test_zero_count() {
        let params = SequenceParams {
            count: 0,
            ..SequenceParams::DAILY
        };
        let err = NumberSequence::generate(DateSeed::from_raw(1), params).unwrap_err();
        assert!(err.is_empty_sequence());
    }

    #[test]
    fn test_invalid_date() {
        let err =
            NumberSequence::generate_for_date("2025-02-30", SequenceParams::DAILY).unwrap_err();
        assert!(err.is_invalid_date());
    }

    #[test]
    fn test_reveal_order_is_not_sorted() {
        let seq = NumberSequence::generate_for_date("2025-01-29", SequenceParams::DAILY).unwrap();
        assert_ne!(seq.as_slice(), seq.sorted());
    }

    #[test]
    fn test_deserialize_rejects_duplicates() {
        let result: Result<NumberSequence, _> = serde_json::from_str("[1, 2, 1]");
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("number 1 appears more than once"));
    }
}
