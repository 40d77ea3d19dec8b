// Copyright (c) 2025 - Cowboy AI, Inc.
//! Booking Record and Status Lifecycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::TimeRange;

/// Booking lifecycle status
///
/// A booking is created `Confirmed` and may only move to `Cancelled`.
/// Cancellation is terminal; a cancelled booking never returns to
/// `Confirmed` and is never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Admitted and holding its time window
    Confirmed,
    /// Cancelled by the owner or an administrator (terminal)
    Cancelled,
}

impl BookingStatus {
    /// Check whether a status transition is allowed
    ///
    /// # Rules
    /// - Confirmed → Cancelled
    /// - Cancelled → (terminal state)
    pub fn can_transition_to(&self, to: &BookingStatus) -> bool {
        matches!(
            (self, to),
            (BookingStatus::Confirmed, BookingStatus::Cancelled)
        )
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Confirmed => write!(f, "CONFIRMED"),
            BookingStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// A reservation of one room for one time window
///
/// `room_id` and `user_id` reference entities owned by other services; the
/// booking service only treats them as opaque keys and never dereferences
/// them locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Server-assigned identifier
    pub id: Uuid,

    /// Room being reserved (foreign, opaque)
    pub room_id: Uuid,

    /// User holding the reservation (foreign, opaque)
    pub user_id: Uuid,

    /// Owner's e-mail, captured at admission so cancellation notices reach
    /// the owner even when someone else cancels
    pub user_email: String,

    /// Reserved time window, half-open
    #[serde(flatten)]
    pub interval: TimeRange,

    /// Lifecycle status
    pub status: BookingStatus,

    /// Audit: actor that created the booking
    pub created_by: Uuid,

    /// Audit: actor that last modified the booking
    pub last_modified_by: Uuid,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}
