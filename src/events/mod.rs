// Copyright (c) 2025 - Cowboy AI, Inc.
//! Booking Lifecycle Events
//!
//! Events published after a booking is admitted or cancelled, consumed by
//! the notification service for user communication. Delivery is
//! at-most-once, best effort: no invariant in the engines depends on a
//! notification arriving.
//!
//! Events differ from commands:
//! - Commands express intent and can be rejected
//! - Events express facts; they carry the data the notification service
//!   needs without calling back (user e-mail, room display name)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::TimeRange;
use crate::subjects::subjects;

pub mod handler;

pub use handler::{BookingEventConsumer, BookingEventHandler};

/// User identity carried in a notification event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    /// User id
    pub id: Uuid,
    /// E-mail address the notification goes to
    pub email: String,
}

/// Room identity carried in a notification event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRef {
    /// Display name, fetched from the room directory at admission time
    pub name: String,
}

/// Payload shared by booking lifecycle events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingNotification {
    /// Event schema version
    pub event_version: u16,

    /// Unique event id
    pub event_id: Uuid,

    /// The booking this event is about
    pub booking_id: Uuid,

    /// Reserved window
    #[serde(flatten)]
    pub interval: TimeRange,

    /// User holding the booking
    pub user: UserRef,

    /// Room the booking is for
    pub room: RoomRef,

    /// When the event occurred
    pub timestamp: DateTime<Utc>,

    /// Correlation id for distributed tracing
    pub correlation_id: Uuid,
}

/// Booking lifecycle event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum BookingEvent {
    /// A booking was admitted and confirmed
    BookingCreated(BookingNotification),
    /// A confirmed booking was cancelled
    BookingCancelled(BookingNotification),
}

impl BookingEvent {
    /// NATS subject this event is published to
    pub fn subject(&self) -> String {
        match self {
            BookingEvent::BookingCreated(_) => subjects::booking_created(),
            BookingEvent::BookingCancelled(_) => subjects::booking_cancelled(),
        }
    }

    /// The shared notification payload
    pub fn notification(&self) -> &BookingNotification {
        match self {
            BookingEvent::BookingCreated(n) => n,
            BookingEvent::BookingCancelled(n) => n,
        }
    }
}
