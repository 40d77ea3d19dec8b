// Copyright (c) 2025 - Cowboy AI, Inc.
//! Acting User Identity
//!
//! Every admission and allocation operation takes an explicit [`Actor`];
//! audit fields are never inferred from ambient caller context.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Booking;

/// Role granted to a platform user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Regular user: may manage only their own bookings
    User,
    /// Administrator: may manage any booking and resource allocations
    Admin,
}

/// The authenticated identity performing an operation
///
/// Authentication itself is an external collaborator's concern; the engines
/// only need the resolved identity and role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// User id, opaque reference to the users service
    pub user_id: Uuid,

    /// E-mail address, carried into notification events
    pub email: String,

    /// Granted role
    pub role: Role,
}

impl Actor {
    /// Whether this actor holds administrative privilege
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether this actor may cancel the given booking
    ///
    /// # Rules
    /// - The booking owner may cancel their own booking
    /// - An administrator may cancel any booking
    pub fn may_cancel(&self, booking: &Booking) -> bool {
        self.is_admin() || booking.user_id == self.user_id
    }
}
