// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for room-booking
//!
//! Provides deterministic test data for the admission and allocation
//! suites. All UUIDs and timestamps are fixed constants to ensure tests
//! are reproducible.
//!
//! # Design Principles
//! - All test data is deterministic (no `Uuid::now_v7()` or `Utc::now()`)
//! - Fixtures are the ONLY place that constructs actors and rooms
//! - Tests use fixtures, never direct construction

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use room_booking::clients::rooms::RoomDirectory;
use room_booking::clients::{DirectoryError, NotificationSink, ResourceDirectory};
use room_booking::domain::{Actor, ResourceKind, ResourceRecord, Role, RoomRecord, RoomStatus};
use room_booking::engine::{
    AllocateResourceCommand, CancelBookingCommand, CreateBookingCommand,
    DeallocateResourceCommand,
};
use room_booking::errors::RpcResult;
use room_booking::events::BookingEvent;

// Fixed test UUIDs (UUID v7 format, but deterministic for testing)
pub const USER_ID_1: &str = "01934f4a-0001-7000-8000-000000000001";
pub const USER_ID_2: &str = "01934f4a-0002-7000-8000-000000000002";
pub const ADMIN_ID_1: &str = "01934f4a-0003-7000-8000-000000000003";

pub const ROOM_ID_7: &str = "01934f4a-1007-7000-8000-000000001007";
pub const ROOM_ID_9: &str = "01934f4a-1009-7000-8000-000000001009";

pub const RESOURCE_ID_1: &str = "01934f4a-2001-7000-8000-000000002001";

pub const CORRELATION_ID_1: &str = "01934f4a-c001-7000-8000-00000000c001";

// Fixed test timestamp (2026-01-19T12:00:00Z)
pub const FIXED_TIMESTAMP: &str = "2026-01-19T12:00:00Z";

/// Parse a fixed UUID from a constant string
pub fn parse_uuid(s: &str) -> Uuid {
    Uuid::parse_str(s).expect("Invalid UUID in test fixture")
}

/// Parse the fixed timestamp
pub fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(FIXED_TIMESTAMP)
        .expect("Invalid timestamp in test fixture")
        .with_timezone(&Utc)
}

/// Regular user fixture
pub fn user_actor() -> Actor {
    Actor {
        user_id: parse_uuid(USER_ID_1),
        email: "user@example.com".to_string(),
        role: Role::User,
    }
}

/// Second regular user fixture
pub fn other_user_actor() -> Actor {
    Actor {
        user_id: parse_uuid(USER_ID_2),
        email: "other@example.com".to_string(),
        role: Role::User,
    }
}

/// Administrator fixture
pub fn admin_actor() -> Actor {
    Actor {
        user_id: parse_uuid(ADMIN_ID_1),
        email: "admin@example.com".to_string(),
        role: Role::Admin,
    }
}

/// An AVAILABLE room record
pub fn available_room(id: Uuid) -> RoomRecord {
    RoomRecord {
        id,
        name: "Sala Aurora".to_string(),
        status: RoomStatus::Available,
        resource_ids: vec![],
    }
}

/// Create command fixture: one hour long, starting one hour out
pub fn create_command(room_id: Uuid) -> CreateBookingCommand {
    CreateBookingCommand {
        room_id,
        start: fixed_timestamp() + Duration::hours(1),
        end: fixed_timestamp() + Duration::hours(2),
        timestamp: fixed_timestamp(),
        correlation_id: parse_uuid(CORRELATION_ID_1),
    }
}

/// Cancel command fixture issued at the fixed timestamp
pub fn cancel_command(booking_id: Uuid) -> CancelBookingCommand {
    CancelBookingCommand {
        booking_id,
        timestamp: fixed_timestamp(),
        correlation_id: parse_uuid(CORRELATION_ID_1),
    }
}

/// Allocate command fixture
pub fn allocate_command(resource_id: Uuid, room_id: Uuid) -> AllocateResourceCommand {
    AllocateResourceCommand {
        resource_id,
        room_id,
        timestamp: fixed_timestamp(),
        correlation_id: parse_uuid(CORRELATION_ID_1),
    }
}

/// Deallocate command fixture
pub fn deallocate_command(resource_id: Uuid, room_id: Uuid) -> DeallocateResourceCommand {
    DeallocateResourceCommand {
        resource_id,
        room_id,
        timestamp: fixed_timestamp(),
        correlation_id: parse_uuid(CORRELATION_ID_1),
    }
}

/// Room directory stub serving a fixed set of rooms
pub struct FixedRoomDirectory {
    rooms: HashMap<Uuid, RoomRecord>,
    /// When set, every lookup fails as if the directory were down
    pub unreachable: bool,
}

impl FixedRoomDirectory {
    pub fn with_rooms(rooms: Vec<RoomRecord>) -> Self {
        Self {
            rooms: rooms.into_iter().map(|r| (r.id, r)).collect(),
            unreachable: false,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            rooms: HashMap::new(),
            unreachable: true,
        }
    }
}

#[async_trait]
impl RoomDirectory for FixedRoomDirectory {
    async fn find_room(&self, room_id: Uuid) -> Result<RoomRecord, DirectoryError> {
        if self.unreachable {
            return Err(DirectoryError::Unavailable("no responders".to_string()));
        }
        self.rooms
            .get(&room_id)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(room_id.to_string()))
    }
}

/// Resource directory stub holding a catalog and allocation sets in memory
pub struct FixedResourceDirectory {
    pub records: Mutex<HashMap<Uuid, ResourceRecord>>,
    pub allocations: Mutex<HashMap<Uuid, Vec<Uuid>>>,
    /// When set, writes fail while reads keep working
    pub fail_writes: bool,
}

impl FixedResourceDirectory {
    pub fn empty() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            allocations: Mutex::new(HashMap::new()),
            fail_writes: false,
        }
    }

    /// Add a catalog record for the resource
    pub fn catalog(&self, resource_id: Uuid, name: &str, kind: ResourceKind) {
        self.records.lock().unwrap().insert(
            resource_id,
            ResourceRecord {
                id: resource_id,
                name: name.to_string(),
                kind,
            },
        );
    }

    pub fn holding(resource_id: Uuid, rooms: Vec<Uuid>) -> Self {
        let directory = Self::empty();
        directory
            .allocations
            .lock()
            .unwrap()
            .insert(resource_id, rooms);
        directory
    }

    pub fn rooms_for(&self, resource_id: Uuid) -> Vec<Uuid> {
        self.allocations
            .lock()
            .unwrap()
            .get(&resource_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl ResourceDirectory for FixedResourceDirectory {
    async fn find_resource(&self, resource_id: Uuid) -> Result<ResourceRecord, DirectoryError> {
        self.records
            .lock()
            .unwrap()
            .get(&resource_id)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(resource_id.to_string()))
    }

    async fn allocated_rooms(&self, resource_id: Uuid) -> Result<Vec<Uuid>, DirectoryError> {
        Ok(self.rooms_for(resource_id))
    }

    async fn set_allocation(
        &self,
        resource_id: Uuid,
        room_id: Uuid,
        _actor_id: Uuid,
    ) -> Result<(), DirectoryError> {
        if self.fail_writes {
            return Err(DirectoryError::Unavailable("write refused".to_string()));
        }
        self.allocations
            .lock()
            .unwrap()
            .entry(resource_id)
            .or_default()
            .push(room_id);
        Ok(())
    }

    async fn clear_allocation(
        &self,
        resource_id: Uuid,
        room_id: Uuid,
        _actor_id: Uuid,
    ) -> Result<(), DirectoryError> {
        if self.fail_writes {
            return Err(DirectoryError::Unavailable("write refused".to_string()));
        }
        let mut allocations = self.allocations.lock().unwrap();
        if let Some(rooms) = allocations.get_mut(&resource_id) {
            if let Some(pos) = rooms.iter().position(|r| *r == room_id) {
                rooms.remove(pos);
            }
        }
        Ok(())
    }
}

/// Notification sink that records events instead of publishing them
#[derive(Default)]
pub struct RecordingSink {
    pub events: Mutex<Vec<BookingEvent>>,
    /// When set, every publish fails; callers must still succeed
    pub fail_publish: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            events: Mutex::new(vec![]),
            fail_publish: true,
        }
    }

    pub fn recorded(&self) -> Vec<BookingEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn publish(&self, event: &BookingEvent) -> RpcResult<()> {
        if self.fail_publish {
            return Err(room_booking::errors::RpcError::Publish(
                "no route to notifications".to_string(),
            ));
        }
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}
