//! Shift window value type.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from constructing a time period.
#[derive(Debug, Error)]
pub enum PeriodError {
    /// Start timestamp is after the end timestamp
    #[error("period start {start} is after end {end}")]
    InvalidRange {
        /// Requested start of the period
        start: DateTime<Utc>,
        /// Requested end of the period
        end: DateTime<Utc>,
    },
}

/// A closed time interval.
///
/// Both boundaries are inclusive: an event stamped exactly at `start` or
/// `end` belongs to the period. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePeriod {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimePeriod {
    /// Create a period from two timestamps.
    ///
    /// # Errors
    /// Returns [`PeriodError::InvalidRange`] if `start` is after `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, PeriodError> {
        if start > end {
            return Err(PeriodError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Start of the period.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// End of the period.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether `t` falls inside the period. Boundary timestamps count as
    /// inside.
    #[must_use]
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.start <= t && t <= self.end
    }

    /// Length of the period.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_contains_is_inclusive_on_both_ends() {
        let period = TimePeriod::new(ts(1, 9), ts(8, 9)).unwrap();

        assert!(period.contains(ts(1, 9)));
        assert!(period.contains(ts(8, 9)));
        assert!(period.contains(ts(4, 0)));
        assert!(!period.contains(ts(1, 8)));
        assert!(!period.contains(ts(8, 10)));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = TimePeriod::new(ts(8, 9), ts(1, 9)).unwrap_err();
        assert!(matches!(err, PeriodError::InvalidRange { .. }));
    }

    #[test]
    fn test_zero_length_period_contains_only_its_instant() {
        let period = TimePeriod::new(ts(3, 12), ts(3, 12)).unwrap();

        assert!(period.contains(ts(3, 12)));
        assert!(!period.contains(ts(3, 11)));
        assert_eq!(period.duration(), Duration::zero());
    }
}
