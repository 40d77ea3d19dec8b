// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Allocation Constraint Engine
//!
//! Enforces resource exclusivity: a discrete resource is attached to at
//! most one room at a time. The authoritative `resource → room` side lives
//! in the remote resource directory; the local room record carries a
//! derived resource-id list. The engine reads the directory first, decides
//! the transition, writes remotely, and only then converges the local list.
//! A remote write failure leaves local state untouched.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::clients::resources::ResourceDirectory;
use crate::clients::DirectoryError;
use crate::domain::{Actor, AllocationState, ResourceRecord};
use crate::engine::commands::{AllocateResourceCommand, DeallocateResourceCommand};
use crate::store::{RoomResourceStore, StoreError};

/// Errors from the allocation engine
#[derive(Debug, thiserror::Error)]
pub enum AllocationError {
    /// The resource is already held by one or more other rooms
    ///
    /// `current` lists every holding room so operators can locate the
    /// resource without a second query.
    #[error("Resource {resource_id} is already allocated to room(s) {current:?}")]
    AlreadyAllocatedElsewhere {
        resource_id: Uuid,
        current: Vec<Uuid>,
    },

    /// The resource is not allocated anywhere (or does not exist)
    #[error("Resource {0} is not allocated to any room")]
    NotFound(Uuid),

    /// Deallocation named a room that does not hold the resource
    #[error("Resource {resource_id} is held by room(s) {current:?}, not room {requested}")]
    WrongRoom {
        resource_id: Uuid,
        requested: Uuid,
        current: Vec<Uuid>,
    },

    /// The directory accepted the read but the subsequent write failed
    ///
    /// Local state was not modified; the operation may be retried.
    #[error("Allocation write failed: {0}")]
    AllocationWriteFailed(String),

    /// The resource directory could not be reached at all
    #[error("Resource directory unavailable: {0}")]
    DirectoryUnavailable(String),

    /// Local persistence failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Enforces exclusivity and keeps both sides of the allocation converged
pub struct AllocationEngine {
    directory: Arc<dyn ResourceDirectory>,
    room_resources: Arc<dyn RoomResourceStore>,
}

impl AllocationEngine {
    /// Create a new allocation engine
    pub fn new(
        directory: Arc<dyn ResourceDirectory>,
        room_resources: Arc<dyn RoomResourceStore>,
    ) -> Self {
        Self {
            directory,
            room_resources,
        }
    }

    /// Allocate a resource to a room
    ///
    /// # Rules
    /// - A resource held by any other room is rejected, reporting every
    ///   holding room
    /// - Re-allocating to the room that already holds the resource is
    ///   idempotent; the local list is still converged
    /// - The directory write happens before the local append, so a write
    ///   failure leaves local state untouched
    pub async fn allocate(
        &self,
        command: AllocateResourceCommand,
        actor: &Actor,
    ) -> Result<(), AllocationError> {
        let rooms = self.read_allocation_set(command.resource_id).await?;

        if rooms.iter().any(|room| *room != command.room_id) {
            return Err(AllocationError::AlreadyAllocatedElsewhere {
                resource_id: command.resource_id,
                current: rooms,
            });
        }

        // The set now holds nothing but the target room; decide the
        // transition from the collapsed state.
        let state = AllocationState::from_rooms(&rooms);
        let already_held = matches!(state, AllocationState::Allocated { .. });

        if already_held {
            info!(
                resource_id = %command.resource_id,
                room_id = %command.room_id,
                "Resource already allocated to this room; converging local list"
            );
        } else {
            self.directory
                .set_allocation(command.resource_id, command.room_id, actor.user_id)
                .await
                .map_err(|e| AllocationError::AllocationWriteFailed(e.to_string()))?;

            info!(
                resource_id = %command.resource_id,
                room_id = %command.room_id,
                actor_id = %actor.user_id,
                "Resource allocated"
            );
        }

        self.room_resources
            .append_resource(command.room_id, command.resource_id)
            .await?;

        Ok(())
    }

    /// Remove a resource from a room
    ///
    /// # Rules
    /// - Fails with [`AllocationError::NotFound`] when the resource is not
    ///   allocated anywhere
    /// - Fails with [`AllocationError::WrongRoom`] when the named room does
    ///   not hold the resource
    /// - The directory write happens before the local removal; exactly one
    ///   occurrence is removed from the local list
    pub async fn deallocate(
        &self,
        command: DeallocateResourceCommand,
        actor: &Actor,
    ) -> Result<(), AllocationError> {
        let rooms = self.read_allocation_set(command.resource_id).await?;

        if rooms.is_empty() {
            return Err(AllocationError::NotFound(command.resource_id));
        }
        if !rooms.contains(&command.room_id) {
            return Err(AllocationError::WrongRoom {
                resource_id: command.resource_id,
                requested: command.room_id,
                current: rooms,
            });
        }

        self.directory
            .clear_allocation(command.resource_id, command.room_id, actor.user_id)
            .await
            .map_err(|e| AllocationError::AllocationWriteFailed(e.to_string()))?;

        let removed = self
            .room_resources
            .remove_resource(command.room_id, command.resource_id)
            .await?;
        if !removed {
            // Directory and local list disagreed; the directory side is
            // already cleared, so only note the drift.
            warn!(
                resource_id = %command.resource_id,
                room_id = %command.room_id,
                "Local room record did not list the deallocated resource"
            );
        }

        info!(
            resource_id = %command.resource_id,
            room_id = %command.room_id,
            actor_id = %actor.user_id,
            "Resource deallocated"
        );

        Ok(())
    }

    /// Resolve the room's resource list against the catalog
    ///
    /// Returns the full record (name, kind) for every resource the room
    /// holds. Ids the catalog no longer knows are logged as drift and
    /// skipped rather than failing the whole listing.
    pub async fn room_inventory(
        &self,
        room_id: Uuid,
    ) -> Result<Vec<ResourceRecord>, AllocationError> {
        let resource_ids = self.room_resources.resources_for_room(room_id).await?;

        let mut inventory = Vec::with_capacity(resource_ids.len());
        for resource_id in resource_ids {
            match self.directory.find_resource(resource_id).await {
                Ok(record) => inventory.push(record),
                Err(DirectoryError::NotFound(_)) => {
                    warn!(
                        %resource_id,
                        %room_id,
                        "Room lists a resource the catalog does not know"
                    );
                }
                Err(e) => return Err(AllocationError::DirectoryUnavailable(e.to_string())),
            }
        }
        Ok(inventory)
    }

    async fn read_allocation_set(&self, resource_id: Uuid) -> Result<Vec<Uuid>, AllocationError> {
        let rooms = match self.directory.allocated_rooms(resource_id).await {
            Ok(rooms) => rooms,
            Err(DirectoryError::NotFound(_)) => {
                return Err(AllocationError::NotFound(resource_id))
            }
            Err(e) => return Err(AllocationError::DirectoryUnavailable(e.to_string())),
        };

        if rooms.len() > 1 {
            warn!(
                %resource_id,
                rooms = ?rooms,
                "Resource allocated to multiple rooms; exclusivity invariant violated"
            );
        }

        Ok(rooms)
    }
}
