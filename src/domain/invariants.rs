// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Booking Business Rules
//!
//! This module contains the business rule validation functions for booking
//! admission and cancellation. All functions are pure (no side effects, no
//! `Utc::now()`) and return detailed violations; the current time is always
//! an explicit parameter supplied by the caller.
//!
//! # Rule Categories
//!
//! 1. **Structural**: the requested interval must be well-formed
//! 2. **Policy**: minimum notice and maximum duration, fixed constants
//! 3. **Lifecycle**: cancellation only of future, still-confirmed bookings

use chrono::{DateTime, Duration, Utc};

use crate::domain::{BookingStatus, TimeRange};

/// Minimum notice before a booking may start, fixed policy constant
pub const MIN_NOTICE_MINUTES: i64 = 15;

/// Maximum booking duration, fixed policy constant
pub const MAX_BOOKING_DURATION_HOURS: i64 = 4;

/// Business rule violation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    /// Requested end time is not after the start time
    #[error("End time must be after start time")]
    InvalidInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// Requested start is inside the minimum notice window
    #[error("Bookings require at least 15 minutes notice")]
    TooSoon,

    /// Requested window exceeds the maximum duration
    #[error("Bookings may last at most 4 hours")]
    TooLong,

    /// Booking already started or finished
    #[error("Booking has already occurred and cannot be cancelled")]
    AlreadyOccurred,

    /// Booking is no longer confirmed
    #[error("Booking is already cancelled")]
    AlreadyCancelled,
}

/// Validate the requested window and produce the admission interval
///
/// # Rules
/// - `end > start`
pub fn validate_interval(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<TimeRange, RuleViolation> {
    TimeRange::new(start, end).map_err(|_| RuleViolation::InvalidInterval { start, end })
}

/// Validate the minimum notice rule
///
/// # Rules
/// - `interval.start >= now + 15 minutes`
pub fn validate_minimum_notice(
    interval: &TimeRange,
    now: DateTime<Utc>,
) -> Result<(), RuleViolation> {
    if interval.start() < now + Duration::minutes(MIN_NOTICE_MINUTES) {
        return Err(RuleViolation::TooSoon);
    }
    Ok(())
}

/// Validate the maximum duration rule
///
/// # Rules
/// - `interval.duration() <= 4 hours` (exactly 4 hours is allowed)
pub fn validate_maximum_duration(interval: &TimeRange) -> Result<(), RuleViolation> {
    if interval.duration() > Duration::hours(MAX_BOOKING_DURATION_HOURS) {
        return Err(RuleViolation::TooLong);
    }
    Ok(())
}

/// Validate that a booking may still be cancelled
///
/// # Rules
/// - Status must be `Confirmed` (cancellation is terminal)
/// - The booking must not have started yet
pub fn validate_cancellable(
    status: BookingStatus,
    interval: &TimeRange,
    now: DateTime<Utc>,
) -> Result<(), RuleViolation> {
    if !status.can_transition_to(&BookingStatus::Cancelled) {
        return Err(RuleViolation::AlreadyCancelled);
    }
    if now > interval.start() {
        return Err(RuleViolation::AlreadyOccurred);
    }
    Ok(())
}
