// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Allocation State Machine
//!
//! A discrete resource (projector, webcam, ...) is attached to at most one
//! room at a time. This module models that pairing as a two-state machine:
//!
//! ```text
//! Unallocated --allocate--> Allocated
//! Allocated --deallocate--> Unallocated
//! ```
//!
//! No other transitions are valid; allocating an already-allocated resource
//! to a different room is rejected, never silently reassigned.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Kind of discrete resource, mirrors the resource catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceKind {
    Projector,
    Webcam,
    Whiteboard,
    Tv,
    Other,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Projector => write!(f, "PROJECTOR"),
            ResourceKind::Webcam => write!(f, "WEBCAM"),
            ResourceKind::Whiteboard => write!(f, "WHITEBOARD"),
            ResourceKind::Tv => write!(f, "TV"),
            ResourceKind::Other => write!(f, "OTHER"),
        }
    }
}

/// Resource record returned by the resource directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Resource id
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Catalog kind
    pub kind: ResourceKind,
}

/// Allocation state of one resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationState {
    /// Not attached to any room
    Unallocated,
    /// Attached to exactly one room
    Allocated {
        /// The owning room
        room_id: Uuid,
    },
}

/// Invalid allocation transition
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocationTransitionError {
    /// Allocate while attached to a different room
    #[error("Resource is already allocated to room {current}")]
    AlreadyAllocated { current: Uuid },

    /// Deallocate while unallocated
    #[error("Resource is not allocated to any room")]
    NotAllocated,

    /// Deallocate naming the wrong room
    #[error("Resource is allocated to room {current}, not room {requested}")]
    WrongRoom { current: Uuid, requested: Uuid },
}

impl AllocationState {
    /// Derive the allocation state from a directory allocation set
    ///
    /// The set is expected to hold zero or one room under the exclusivity
    /// invariant; a larger set is collapsed to its first entry (callers
    /// surface the violation separately).
    pub fn from_rooms(rooms: &[Uuid]) -> Self {
        match rooms.first() {
            Some(room_id) => AllocationState::Allocated { room_id: *room_id },
            None => AllocationState::Unallocated,
        }
    }

    /// Attempt the `allocate` transition
    ///
    /// Re-allocating to the room already holding the resource is an
    /// idempotent no-op.
    pub fn allocate(&self, room_id: Uuid) -> Result<AllocationState, AllocationTransitionError> {
        match self {
            AllocationState::Unallocated => Ok(AllocationState::Allocated { room_id }),
            AllocationState::Allocated { room_id: current } if *current == room_id => {
                Ok(*self)
            }
            AllocationState::Allocated { room_id: current } => {
                Err(AllocationTransitionError::AlreadyAllocated { current: *current })
            }
        }
    }

    /// Attempt the `deallocate` transition
    pub fn deallocate(&self, room_id: Uuid) -> Result<AllocationState, AllocationTransitionError> {
        match self {
            AllocationState::Unallocated => Err(AllocationTransitionError::NotAllocated),
            AllocationState::Allocated { room_id: current } if *current == room_id => {
                Ok(AllocationState::Unallocated)
            }
            AllocationState::Allocated { room_id: current } => {
                Err(AllocationTransitionError::WrongRoom {
                    current: *current,
                    requested: room_id,
                })
            }
        }
    }
}
