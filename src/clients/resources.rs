// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Directory Client
//!
//! Outbound capability consumed by the allocation engine. The resource
//! directory owns the `resource → rooms` side of the allocation
//! relationship; this client reads and writes it over NATS request/reply.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::clients::{DirectoryError, DirectoryReply, SCHEMA_VERSION};
use crate::domain::ResourceRecord;
use crate::nats::NatsClient;
use crate::subjects::subjects;

/// Request payload for `reservations.resources.find_one`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindResourceRequest {
    /// Wire schema version
    pub version: u16,
    /// Resource to look up
    pub resource_id: Uuid,
}

/// Request payload for `reservations.resources.allocated_rooms`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocatedRoomsRequest {
    /// Wire schema version
    pub version: u16,
    /// Resource to query
    pub resource_id: Uuid,
}

/// Request payload for `reservations.resources.allocate` / `.deallocate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// Wire schema version
    pub version: u16,
    /// Resource being (de)allocated
    pub resource_id: Uuid,
    /// Target room
    pub room_id: Uuid,
    /// Actor performing the change, for remote-side audit
    pub actor_id: Uuid,
}

/// Resource directory capability
#[async_trait]
pub trait ResourceDirectory: Send + Sync {
    /// Look up a single resource from the catalog
    async fn find_resource(&self, resource_id: Uuid) -> Result<ResourceRecord, DirectoryError>;

    /// Rooms the resource is currently allocated to
    ///
    /// Expected length 0 or 1 under the exclusivity invariant; callers
    /// surface longer sets as invariant violations.
    async fn allocated_rooms(&self, resource_id: Uuid) -> Result<Vec<Uuid>, DirectoryError>;

    /// Record an allocation on the directory side
    async fn set_allocation(
        &self,
        resource_id: Uuid,
        room_id: Uuid,
        actor_id: Uuid,
    ) -> Result<(), DirectoryError>;

    /// Clear an allocation on the directory side
    async fn clear_allocation(
        &self,
        resource_id: Uuid,
        room_id: Uuid,
        actor_id: Uuid,
    ) -> Result<(), DirectoryError>;
}

/// Resource directory backed by NATS request/reply
#[derive(Clone)]
pub struct NatsResourceDirectory {
    client: NatsClient,
}

impl NatsResourceDirectory {
    /// Create a new resource directory client
    pub fn new(client: NatsClient) -> Self {
        Self { client }
    }

    async fn allocation_call(
        &self,
        subject: &str,
        resource_id: Uuid,
        room_id: Uuid,
        actor_id: Uuid,
    ) -> Result<(), DirectoryError> {
        let request = AllocationRequest {
            version: SCHEMA_VERSION,
            resource_id,
            room_id,
            actor_id,
        };

        debug!(%resource_id, %room_id, subject, "Sending allocation call");

        let reply: DirectoryReply<()> = self
            .client
            .request(subject, &request)
            .await
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;

        reply.into_result()
    }
}

#[async_trait]
impl ResourceDirectory for NatsResourceDirectory {
    async fn find_resource(&self, resource_id: Uuid) -> Result<ResourceRecord, DirectoryError> {
        let request = FindResourceRequest {
            version: SCHEMA_VERSION,
            resource_id,
        };

        let reply: DirectoryReply<ResourceRecord> = self
            .client
            .request(&subjects::resources_find_one(), &request)
            .await
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;

        reply.into_result()
    }

    async fn allocated_rooms(&self, resource_id: Uuid) -> Result<Vec<Uuid>, DirectoryError> {
        let request = AllocatedRoomsRequest {
            version: SCHEMA_VERSION,
            resource_id,
        };

        let reply: DirectoryReply<Vec<Uuid>> = self
            .client
            .request(&subjects::resources_allocated_rooms(), &request)
            .await
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;

        reply.into_result()
    }

    async fn set_allocation(
        &self,
        resource_id: Uuid,
        room_id: Uuid,
        actor_id: Uuid,
    ) -> Result<(), DirectoryError> {
        self.allocation_call(&subjects::resources_allocate(), resource_id, room_id, actor_id)
            .await
    }

    async fn clear_allocation(
        &self,
        resource_id: Uuid,
        room_id: Uuid,
        actor_id: Uuid,
    ) -> Result<(), DirectoryError> {
        self.allocation_call(
            &subjects::resources_deallocate(),
            resource_id,
            room_id,
            actor_id,
        )
        .await
    }
}
