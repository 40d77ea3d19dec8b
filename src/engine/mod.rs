// Copyright (c) 2025 - Cowboy AI, Inc.
//! Booking and Allocation Engines
//!
//! The two decision-making components of the service: the admission engine
//! owns the booking lifecycle, the allocation engine owns the
//! resource-to-room pairing. Both take explicit commands and an explicit
//! [`Actor`](crate::domain::Actor), and reach remote services only through
//! the trait seams in [`crate::clients`].

pub mod allocation;
pub mod booking;
pub mod commands;

pub use allocation::{AllocationEngine, AllocationError};
pub use booking::{BookingEngine, BookingError};
pub use commands::{
    AllocateResourceCommand, CancelBookingCommand, CreateBookingCommand,
    DeallocateResourceCommand,
};
