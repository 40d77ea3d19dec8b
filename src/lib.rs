//! Booking admission and resource allocation engines for the room
//! reservation platform.
//!
//! This crate implements the two places where correctness depends on a
//! concurrency/consistency protocol across service boundaries: admitting
//! bookings (time-window conflict detection plus business-rule validation)
//! and allocating discrete resources to rooms under an exclusivity
//! constraint. Services communicate over NATS request/reply and publish
//! booking lifecycle events fire-and-forget.

pub mod clients;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod events;
pub mod nats;
pub mod store;
pub mod subjects;

// Re-export commonly used types
pub use domain::{Actor, Booking, BookingStatus, Role, RoomRecord, RoomStatus, TimeRange};
pub use engine::{AllocationEngine, AllocationError, BookingEngine, BookingError};
pub use errors::{RpcError, RpcResult};
pub use nats::{MessageHandler, NatsClient, NatsConfig};
