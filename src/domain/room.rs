// Copyright (c) 2025 - Cowboy AI, Inc.
//! Remote Room Shape
//!
//! Rooms are owned by the rooms service; the booking and allocation engines
//! only see this read-model returned by the room directory.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Room availability status as reported by the rooms service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    /// Bookable
    Available,
    /// Temporarily not bookable
    Maintenance,
    /// Soft-deleted, never bookable
    Deactivated,
}

impl RoomStatus {
    /// Whether bookings may be admitted for a room in this status
    pub fn is_bookable(&self) -> bool {
        matches!(self, RoomStatus::Available)
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomStatus::Available => write!(f, "AVAILABLE"),
            RoomStatus::Maintenance => write!(f, "MAINTENANCE"),
            RoomStatus::Deactivated => write!(f, "DEACTIVATED"),
        }
    }
}

/// Room record returned by the room directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    /// Room id
    pub id: Uuid,

    /// Display name, carried into notification events
    pub name: String,

    /// Current availability status
    pub status: RoomStatus,

    /// Resources currently attached to the room
    pub resource_ids: Vec<Uuid>,
}
