// Copyright (c) 2025 - Cowboy AI, Inc.
//! Half-Open Time Interval Value Object

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Time range validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeRangeError {
    #[error("End time {end} is not after start time {start}")]
    EndNotAfterStart {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// Half-open time interval `[start, end)` value object
///
/// Includes its start instant and excludes its end instant, so adjacent
/// ranges tile without overlapping. Invariant: `end > start`, enforced at
/// construction.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use room_booking::domain::TimeRange;
///
/// let ten = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();
/// let eleven = Utc.with_ymd_and_hms(2025, 1, 1, 11, 0, 0).unwrap();
/// let noon = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
///
/// let morning = TimeRange::new(ten, eleven).unwrap();
/// let midday = TimeRange::new(eleven, noon).unwrap();
///
/// // Touching intervals do not overlap
/// assert!(!morning.overlaps(&midday));
///
/// // Zero-width and inverted intervals are rejected
/// assert!(TimeRange::new(ten, ten).is_err());
/// assert!(TimeRange::new(eleven, ten).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    /// Create a new time range with validation
    ///
    /// # Invariants
    /// - `end > start` (zero-width ranges are invalid)
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TimeRangeError> {
        if end <= start {
            return Err(TimeRangeError::EndNotAfterStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Start instant (inclusive)
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// End instant (exclusive)
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Length of the interval
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Half-open overlap test
    ///
    /// Two ranges overlap when `self.start < other.end && self.end >
    /// other.start`. Ranges that merely touch at a boundary (one ending
    /// exactly when the other starts) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Whether an instant falls within the range
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}
