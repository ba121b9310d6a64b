//! Budget-request numbering.
//!
//! Request numbers read `BR-<year>-<sequence>` with the sequence zero-padded
//! to three digits and reset at the start of each year. The storage layer
//! enforces monotonicity with a per-year counter row; this module holds the
//! pure parse/format/successor logic.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Prefix shared by all request numbers.
const PREFIX: &str = "BR";

/// Errors from parsing a request number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NumberingError {
    /// The string does not match `BR-<year>-<sequence>`.
    #[error("Malformed request number: {0}")]
    Malformed(String),
}

/// A parsed `BR-<year>-<sequence>` request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestNumber {
    year: i32,
    sequence: u32,
}

impl RequestNumber {
    /// Creates a request number from its parts.
    #[must_use]
    pub fn new(year: i32, sequence: u32) -> Self {
        Self { year, sequence }
    }

    /// The calendar year embedded in the number.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The per-year sequence, starting at 1.
    #[must_use]
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Parses a request number such as `BR-2025-007`.
    ///
    /// # Errors
    ///
    /// Returns `Malformed` if the prefix, year, or sequence is missing or
    /// not numeric.
    pub fn parse(s: &str) -> Result<Self, NumberingError> {
        let malformed = || NumberingError::Malformed(s.to_string());

        let mut parts = s.splitn(3, '-');
        let prefix = parts.next().ok_or_else(malformed)?;
        let year_part = parts.next().ok_or_else(malformed)?;
        let sequence_part = parts.next().ok_or_else(malformed)?;

        if prefix != PREFIX || year_part.len() != 4 {
            return Err(malformed());
        }

        let year: i32 = year_part.parse().map_err(|_| malformed())?;
        let sequence: u32 = sequence_part.parse().map_err(|_| malformed())?;
        if sequence == 0 {
            return Err(malformed());
        }

        Ok(Self { year, sequence })
    }

    /// The number that follows `last` in `current_year`.
    ///
    /// Same year: the sequence increments. A different year, or no
    /// predecessor at all, starts the year over at sequence 1.
    #[must_use]
    pub fn next_in_year(last: Option<&Self>, current_year: i32) -> Self {
        let sequence = match last {
            Some(prev) if prev.year == current_year => prev.sequence + 1,
            _ => 1,
        };
        Self {
            year: current_year,
            sequence,
        }
    }
}

impl fmt::Display for RequestNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}-{}-{:03}", self.year, self.sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_valid() {
        let n = RequestNumber::parse("BR-2025-007").unwrap();
        assert_eq!(n.year(), 2025);
        assert_eq!(n.sequence(), 7);
    }

    #[test]
    fn test_parse_wide_sequence() {
        let n = RequestNumber::parse("BR-2025-1042").unwrap();
        assert_eq!(n.sequence(), 1042);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for s in ["", "BR-2025", "XX-2025-001", "BR-25-001", "BR-2025-abc", "BR-2025-0"] {
            assert!(RequestNumber::parse(s).is_err(), "should reject {s:?}");
        }
    }

    #[test]
    fn test_display_zero_pads_to_three() {
        assert_eq!(RequestNumber::new(2025, 8).to_string(), "BR-2025-008");
        assert_eq!(RequestNumber::new(2025, 123).to_string(), "BR-2025-123");
    }

    #[test]
    fn test_display_widens_past_999() {
        assert_eq!(RequestNumber::new(2025, 1042).to_string(), "BR-2025-1042");
    }

    #[test]
    fn test_next_in_same_year_increments() {
        let last = RequestNumber::parse("BR-2025-007").unwrap();
        let next = RequestNumber::next_in_year(Some(&last), 2025);
        assert_eq!(next.to_string(), "BR-2025-008");
    }

    #[test]
    fn test_next_after_year_change_resets() {
        let last = RequestNumber::parse("BR-2025-144").unwrap();
        let next = RequestNumber::next_in_year(Some(&last), 2026);
        assert_eq!(next.to_string(), "BR-2026-001");
    }

    #[test]
    fn test_next_without_predecessor_starts_at_one() {
        let next = RequestNumber::next_in_year(None, 2026);
        assert_eq!(next.to_string(), "BR-2026-001");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Formatting then parsing returns the same number.
        #[test]
        fn prop_display_parse_round_trip(year in 1000i32..=9999, sequence in 1u32..100_000) {
            let n = RequestNumber::new(year, sequence);
            prop_assert_eq!(RequestNumber::parse(&n.to_string()), Ok(n));
        }

        /// The successor is strictly monotonic within a year.
        #[test]
        fn prop_next_is_monotonic_within_year(year in 1000i32..=9999, sequence in 1u32..100_000) {
            let last = RequestNumber::new(year, sequence);
            let next = RequestNumber::next_in_year(Some(&last), year);
            prop_assert_eq!(next.year(), year);
            prop_assert_eq!(next.sequence(), sequence + 1);
        }

        /// Any year change resets the sequence to 1.
        #[test]
        fn prop_year_change_resets(
            last_year in 1000i32..=9998,
            sequence in 1u32..100_000,
            offset in 1i32..100,
        ) {
            let last = RequestNumber::new(last_year, sequence);
            let next = RequestNumber::next_in_year(Some(&last), last_year + offset);
            prop_assert_eq!(next.sequence(), 1);
        }
    }
}
