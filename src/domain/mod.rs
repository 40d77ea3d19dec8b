// Copyright (c) 2025 - Cowboy AI, Inc.
//! Domain model for the reservation platform
//!
//! Value objects, records, and pure business rules. Nothing in this module
//! performs I/O; the current time is always an explicit parameter.

pub mod actor;
pub mod booking;
pub mod invariants;
pub mod resource;
pub mod room;
pub mod time_range;

pub use actor::{Actor, Role};
pub use booking::{Booking, BookingStatus};
pub use invariants::{RuleViolation, MAX_BOOKING_DURATION_HOURS, MIN_NOTICE_MINUTES};
pub use resource::{AllocationState, AllocationTransitionError, ResourceKind, ResourceRecord};
pub use room::{RoomRecord, RoomStatus};
pub use time_range::{TimeRange, TimeRangeError};
