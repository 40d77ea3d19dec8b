// Copyright (c) 2025 - Cowboy AI, Inc.
//! Booking Store Abstraction
//!
//! Defines the persistence interface owned by the booking service, plus the
//! room-side resource list mutated by the allocation engine.
//!
//! # Ownership
//!
//! The [`BookingStore`] is exclusively owned and mutated by the booking
//! admission engine; no other component writes to it. The
//! [`RoomResourceStore`] is mutated only by the allocation engine acting on
//! behalf of the service holding the room data.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{Booking, TimeRange};

pub mod memory;

pub use memory::{InMemoryBookingStore, InMemoryRoomResourceStore};

/// Errors raised by the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with the given id
    #[error("Record {0} not found")]
    NotFound(Uuid),

    /// Underlying storage failure
    #[error("Storage error: {0}")]
    Backend(String),
}

/// Sort direction for booking projections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Persistent collection of bookings for one booking service instance
///
/// All projection queries return only `Confirmed` bookings ordered by
/// interval start (ascending unless stated otherwise); cancelled bookings
/// stay in the store but drop out of every projection.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Insert a new booking
    async fn insert(&self, booking: Booking) -> Result<(), StoreError>;

    /// Point lookup by id, cancelled bookings included
    async fn get(&self, id: Uuid) -> Result<Option<Booking>, StoreError>;

    /// Replace an existing booking (keyed by id)
    ///
    /// # Errors
    ///
    /// `NotFound` if no booking with the id exists.
    async fn update(&self, booking: Booking) -> Result<(), StoreError>;

    /// Conflict query: any `Confirmed` booking for the room whose interval
    /// overlaps the candidate under the half-open rule
    async fn find_conflict(
        &self,
        room_id: Uuid,
        interval: &TimeRange,
    ) -> Result<Option<Booking>, StoreError>;

    /// Confirmed bookings held by one user
    async fn find_confirmed_for_user(&self, user_id: Uuid) -> Result<Vec<Booking>, StoreError>;

    /// All confirmed bookings (admin projection)
    async fn find_all_confirmed(&self, order: SortOrder) -> Result<Vec<Booking>, StoreError>;

    /// Confirmed bookings for a room overlapping the window
    ///
    /// Uses the same half-open overlap rule as the conflict query, not a
    /// pure containment test.
    async fn find_confirmed_for_room(
        &self,
        room_id: Uuid,
        window: &TimeRange,
    ) -> Result<Vec<Booking>, StoreError>;
}

/// Resource-id list embedded in the locally-owned room record
///
/// Append de-duplicates; remove takes out a single occurrence.
#[async_trait]
pub trait RoomResourceStore: Send + Sync {
    /// Resource ids currently attached to the room
    async fn resources_for_room(&self, room_id: Uuid) -> Result<Vec<Uuid>, StoreError>;

    /// Append a resource id to the room's list, de-duplicated
    async fn append_resource(&self, room_id: Uuid, resource_id: Uuid) -> Result<(), StoreError>;

    /// Remove one occurrence of the resource id from the room's list
    ///
    /// Returns whether an occurrence was removed.
    async fn remove_resource(&self, room_id: Uuid, resource_id: Uuid)
        -> Result<bool, StoreError>;
}
