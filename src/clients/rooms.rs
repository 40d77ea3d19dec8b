// Copyright (c) 2025 - Cowboy AI, Inc.
//! Room Availability Client
//!
//! Outbound capability consumed by the booking admission engine: given a
//! room id, return the room's current status and metadata, or fail if the
//! room does not exist or the remote call fails.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::clients::{DirectoryError, DirectoryReply, SCHEMA_VERSION};
use crate::domain::RoomRecord;
use crate::nats::NatsClient;
use crate::subjects::subjects;

/// Request payload for `reservations.rooms.find_one`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindRoomRequest {
    /// Wire schema version
    pub version: u16,
    /// Room to look up
    pub room_id: Uuid,
}

/// Room directory capability
#[async_trait]
pub trait RoomDirectory: Send + Sync {
    /// Look up a single room with status, name, and attached resources
    async fn find_room(&self, room_id: Uuid) -> Result<RoomRecord, DirectoryError>;
}

/// Room directory backed by NATS request/reply
#[derive(Clone)]
pub struct NatsRoomDirectory {
    client: NatsClient,
}

impl NatsRoomDirectory {
    /// Create a new room directory client
    pub fn new(client: NatsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RoomDirectory for NatsRoomDirectory {
    async fn find_room(&self, room_id: Uuid) -> Result<RoomRecord, DirectoryError> {
        let request = FindRoomRequest {
            version: SCHEMA_VERSION,
            room_id,
        };

        debug!(%room_id, "Requesting room from directory");

        let reply: DirectoryReply<RoomRecord> = self
            .client
            .request(&subjects::rooms_find_one(), &request)
            .await
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;

        reply.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoomStatus;

    #[test]
    fn test_find_room_request_schema() {
        let request = FindRoomRequest {
            version: SCHEMA_VERSION,
            room_id: Uuid::nil(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(
            value["room_id"],
            "00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_room_reply_deserialization() {
        let json = r#"{
            "result": "ok",
            "data": {
                "id": "00000000-0000-0000-0000-000000000001",
                "name": "Sala Aurora",
                "status": "AVAILABLE",
                "resource_ids": []
            }
        }"#;
        let reply: DirectoryReply<RoomRecord> = serde_json::from_str(json).unwrap();
        let room = reply.into_result().unwrap();
        assert_eq!(room.name, "Sala Aurora");
        assert_eq!(room.status, RoomStatus::Available);
    }
}
