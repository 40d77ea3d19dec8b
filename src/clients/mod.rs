// Copyright (c) 2025 - Cowboy AI, Inc.
//! Outbound capabilities consumed by the engines
//!
//! Each remote service is reached through a trait seam with a NATS
//! request/reply implementation behind it. Every call is bounded by the
//! client's configured request timeout; on timeout the dependency is
//! treated as unavailable and the enclosing operation fails fast.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod notifications;
pub mod resources;
pub mod rooms;

pub use notifications::{NatsNotificationSink, NotificationSink};
pub use resources::{NatsResourceDirectory, ResourceDirectory};
pub use rooms::{NatsRoomDirectory, RoomDirectory};

/// Wire schema version carried by every request
pub const SCHEMA_VERSION: u16 = 1;

/// Errors surfaced by directory clients
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The remote service reports the entity does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The remote service is unreachable, timed out, or reported a failure
    #[error("Directory unavailable: {0}")]
    Unavailable(String),

    /// The reply did not match the expected schema
    #[error("Malformed directory reply: {0}")]
    BadReply(String),
}

/// Tagged reply envelope shared by all directory operations
///
/// Replies are validated at the boundary; anything that does not
/// deserialize into this shape surfaces as [`DirectoryError::BadReply`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum DirectoryReply<T> {
    /// Successful reply with payload
    Ok { data: T },
    /// The requested entity does not exist
    NotFound { message: String },
    /// The remote service failed to process the request
    Error { message: String },
}

impl<T> DirectoryReply<T> {
    /// Unwrap the envelope into a client result
    pub fn into_result(self) -> Result<T, DirectoryError> {
        match self {
            DirectoryReply::Ok { data } => Ok(data),
            DirectoryReply::NotFound { message } => Err(DirectoryError::NotFound(message)),
            DirectoryReply::Error { message } => Err(DirectoryError::Unavailable(message)),
        }
    }
}
