// Copyright (c) 2025 - Cowboy AI, Inc.

//! NATS subject hierarchy for the reservation platform
//!
//! Defines the semantic subject patterns used for routing directory calls
//! and booking lifecycle events between services.
//!
//! # Subject Pattern
//!
//! All subjects follow the hierarchical pattern:
//!
//! ```text
//! reservations.{service}.{operation}
//! ```
//!
//! This allows for:
//! - Precise request subjects (`reservations.rooms.find_one`)
//! - Service-level wildcards (`reservations.bookings.>`)
//! - Global subscriptions (`reservations.>`)
//!
//! # Examples
//!
//! ```rust
//! use room_booking::subjects::{SubjectBuilder, ServiceArea, Operation};
//!
//! // Build a specific subject
//! let subject = SubjectBuilder::new()
//!     .service(ServiceArea::Rooms)
//!     .operation(Operation::FindOne)
//!     .build();
//! assert_eq!(subject, "reservations.rooms.find_one");
//!
//! // Build a wildcard subscription
//! let wildcard = SubjectBuilder::new()
//!     .service(ServiceArea::Bookings)
//!     .build_wildcard();
//! assert_eq!(wildcard, "reservations.bookings.>");
//! ```

use std::fmt;

/// Root namespace for all reservation subjects
pub const RESERVATIONS_ROOT: &str = "reservations";

/// Services participating in the reservation platform
///
/// Each variant maps to one independently deployable service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceArea {
    /// Booking admission and lifecycle
    Bookings,
    /// Room catalog (availability directory)
    Rooms,
    /// Discrete resource directory (projectors, webcams, ...)
    Resources,
    /// User-facing notification delivery
    Notifications,
}

impl fmt::Display for ServiceArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceArea::Bookings => write!(f, "bookings"),
            ServiceArea::Rooms => write!(f, "rooms"),
            ServiceArea::Resources => write!(f, "resources"),
            ServiceArea::Notifications => write!(f, "notifications"),
        }
    }
}

/// Operations routed over NATS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    // Directory request/reply operations
    /// Look up a single room with status and metadata
    FindOne,
    /// List the rooms a resource is currently allocated to
    AllocatedRooms,
    /// Record a resource-to-room allocation
    Allocate,
    /// Clear a resource-to-room allocation
    Deallocate,

    // Booking lifecycle events (fire-and-forget)
    /// A booking was admitted and confirmed
    Created,
    /// A confirmed booking was cancelled
    Cancelled,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::FindOne => write!(f, "find_one"),
            Operation::AllocatedRooms => write!(f, "allocated_rooms"),
            Operation::Allocate => write!(f, "allocate"),
            Operation::Deallocate => write!(f, "deallocate"),
            Operation::Created => write!(f, "created"),
            Operation::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Builder for reservation NATS subjects
///
/// Provides a type-safe way to construct NATS subject patterns.
#[derive(Debug, Clone)]
pub struct SubjectBuilder {
    service: Option<ServiceArea>,
    operation: Option<Operation>,
}

impl SubjectBuilder {
    /// Create a new subject builder
    pub fn new() -> Self {
        Self {
            service: None,
            operation: None,
        }
    }

    /// Set the service area
    pub fn service(mut self, service: ServiceArea) -> Self {
        self.service = Some(service);
        self
    }

    /// Set the operation
    pub fn operation(mut self, operation: Operation) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Build the complete subject string
    ///
    /// # Panics
    ///
    /// Panics if service or operation is not set
    pub fn build(self) -> String {
        let service = self.service.expect("service must be set");
        let operation = self.operation.expect("operation must be set");
        format!("{}.{}.{}", RESERVATIONS_ROOT, service, operation)
    }

    /// Build a wildcard subscription for all operations on this service
    ///
    /// Returns: `reservations.{service}.>`
    ///
    /// # Panics
    ///
    /// Panics if service is not set
    pub fn build_wildcard(self) -> String {
        let service = self.service.expect("service must be set");
        format!("{}.{}.>", RESERVATIONS_ROOT, service)
    }

    /// Build a subscription for all reservation events
    ///
    /// Returns: `reservations.>`
    pub fn build_all() -> String {
        format!("{}.>", RESERVATIONS_ROOT)
    }
}

impl Default for SubjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience functions for common subject patterns
pub mod subjects {
    use super::*;

    // Room directory subjects
    pub fn rooms_find_one() -> String {
        SubjectBuilder::new()
            .service(ServiceArea::Rooms)
            .operation(Operation::FindOne)
            .build()
    }

    // Resource directory subjects
    pub fn resources_find_one() -> String {
        SubjectBuilder::new()
            .service(ServiceArea::Resources)
            .operation(Operation::FindOne)
            .build()
    }

    pub fn resources_allocated_rooms() -> String {
        SubjectBuilder::new()
            .service(ServiceArea::Resources)
            .operation(Operation::AllocatedRooms)
            .build()
    }

    pub fn resources_allocate() -> String {
        SubjectBuilder::new()
            .service(ServiceArea::Resources)
            .operation(Operation::Allocate)
            .build()
    }

    pub fn resources_deallocate() -> String {
        SubjectBuilder::new()
            .service(ServiceArea::Resources)
            .operation(Operation::Deallocate)
            .build()
    }

    // Booking lifecycle subjects
    pub fn booking_created() -> String {
        SubjectBuilder::new()
            .service(ServiceArea::Bookings)
            .operation(Operation::Created)
            .build()
    }

    pub fn booking_cancelled() -> String {
        SubjectBuilder::new()
            .service(ServiceArea::Bookings)
            .operation(Operation::Cancelled)
            .build()
    }

    // Wildcard subscriptions
    pub fn all_booking_events() -> String {
        SubjectBuilder::new()
            .service(ServiceArea::Bookings)
            .build_wildcard()
    }

    pub fn all_reservation_events() -> String {
        SubjectBuilder::build_all()
    }
}
