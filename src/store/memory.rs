// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-Memory Store Implementations
//!
//! Reference implementations of the store traits backed by `tokio::sync`
//! primitives. Used directly by tests and as the storage layer for single
//! instance deployments; a database-backed implementation plugs in behind
//! the same traits.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{Booking, BookingStatus, TimeRange};
use crate::store::{BookingStore, RoomResourceStore, SortOrder, StoreError};

/// In-memory booking store
#[derive(Debug, Default)]
pub struct InMemoryBookingStore {
    bookings: RwLock<HashMap<Uuid, Booking>>,
}

impl InMemoryBookingStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted(mut bookings: Vec<Booking>, order: SortOrder) -> Vec<Booking> {
        bookings.sort_by_key(|b| b.interval.start());
        if order == SortOrder::Descending {
            bookings.reverse();
        }
        bookings
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn insert(&self, booking: Booking) -> Result<(), StoreError> {
        self.bookings.write().await.insert(booking.id, booking);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Booking>, StoreError> {
        Ok(self.bookings.read().await.get(&id).cloned())
    }

    async fn update(&self, booking: Booking) -> Result<(), StoreError> {
        let mut bookings = self.bookings.write().await;
        match bookings.get_mut(&booking.id) {
            Some(existing) => {
                *existing = booking;
                Ok(())
            }
            None => Err(StoreError::NotFound(booking.id)),
        }
    }

    async fn find_conflict(
        &self,
        room_id: Uuid,
        interval: &TimeRange,
    ) -> Result<Option<Booking>, StoreError> {
        Ok(self
            .bookings
            .read()
            .await
            .values()
            .find(|b| {
                b.room_id == room_id
                    && b.status == BookingStatus::Confirmed
                    && b.interval.overlaps(interval)
            })
            .cloned())
    }

    async fn find_confirmed_for_user(&self, user_id: Uuid) -> Result<Vec<Booking>, StoreError> {
        let bookings = self
            .bookings
            .read()
            .await
            .values()
            .filter(|b| b.user_id == user_id && b.status == BookingStatus::Confirmed)
            .cloned()
            .collect();
        Ok(Self::sorted(bookings, SortOrder::Ascending))
    }

    async fn find_all_confirmed(&self, order: SortOrder) -> Result<Vec<Booking>, StoreError> {
        let bookings = self
            .bookings
            .read()
            .await
            .values()
            .filter(|b| b.status == BookingStatus::Confirmed)
            .cloned()
            .collect();
        Ok(Self::sorted(bookings, order))
    }

    async fn find_confirmed_for_room(
        &self,
        room_id: Uuid,
        window: &TimeRange,
    ) -> Result<Vec<Booking>, StoreError> {
        let bookings = self
            .bookings
            .read()
            .await
            .values()
            .filter(|b| {
                b.room_id == room_id
                    && b.status == BookingStatus::Confirmed
                    && b.interval.overlaps(window)
            })
            .cloned()
            .collect();
        Ok(Self::sorted(bookings, SortOrder::Ascending))
    }
}

/// In-memory room resource list store
#[derive(Debug, Default)]
pub struct InMemoryRoomResourceStore {
    resources: RwLock<HashMap<Uuid, Vec<Uuid>>>,
}

impl InMemoryRoomResourceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomResourceStore for InMemoryRoomResourceStore {
    async fn resources_for_room(&self, room_id: Uuid) -> Result<Vec<Uuid>, StoreError> {
        Ok(self
            .resources
            .read()
            .await
            .get(&room_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn append_resource(&self, room_id: Uuid, resource_id: Uuid) -> Result<(), StoreError> {
        let mut resources = self.resources.write().await;
        let list = resources.entry(room_id).or_default();
        if !list.contains(&resource_id) {
            list.push(resource_id);
        }
        Ok(())
    }

    async fn remove_resource(
        &self,
        room_id: Uuid,
        resource_id: Uuid,
    ) -> Result<bool, StoreError> {
        let mut resources = self.resources.write().await;
        let Some(list) = resources.get_mut(&room_id) else {
            return Ok(false);
        };
        // Remove a single occurrence, not all
        match list.iter().position(|id| *id == resource_id) {
            Some(index) => {
                list.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
