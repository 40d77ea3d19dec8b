// Copyright (c) 2025 - Cowboy AI, Inc.
//! Commands for the Admission and Allocation Engines
//!
//! Commands express user intent and can fail validation. Each command
//! carries an explicit `timestamp` (the engines never call `Utc::now()`
//! inside business logic) and a `correlation_id` for distributed tracing.
//! The acting identity is passed alongside the command as an explicit
//! [`Actor`](crate::domain::Actor), never inferred from ambient state.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Command to admit a new booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookingCommand {
    /// Room to reserve
    pub room_id: Uuid,

    /// Requested window start (inclusive)
    pub start: DateTime<Utc>,

    /// Requested window end (exclusive)
    pub end: DateTime<Utc>,

    /// Timestamp when the command was issued; also the "now" used by the
    /// minimum-notice rule
    pub timestamp: DateTime<Utc>,

    /// Correlation ID for distributed tracing
    pub correlation_id: Uuid,
}

/// Command to cancel a confirmed booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelBookingCommand {
    /// Booking to cancel
    pub booking_id: Uuid,

    /// Timestamp when the command was issued
    pub timestamp: DateTime<Utc>,

    /// Correlation ID for distributed tracing
    pub correlation_id: Uuid,
}

/// Command to allocate a resource to a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocateResourceCommand {
    /// Resource being allocated
    pub resource_id: Uuid,

    /// Room receiving the resource
    pub room_id: Uuid,

    /// Timestamp when the command was issued
    pub timestamp: DateTime<Utc>,

    /// Correlation ID for distributed tracing
    pub correlation_id: Uuid,
}

/// Command to remove a resource from a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeallocateResourceCommand {
    /// Resource being deallocated
    pub resource_id: Uuid,

    /// Room the resource is expected to be in
    pub room_id: Uuid,

    /// Timestamp when the command was issued
    pub timestamp: DateTime<Utc>,

    /// Correlation ID for distributed tracing
    pub correlation_id: Uuid,
}
