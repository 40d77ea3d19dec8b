// Copyright (c) 2025 - Cowboy AI, Inc.
//! Booking Admission Engine
//!
//! Decides whether booking requests are admitted. Every admission runs the
//! same gauntlet: structural validation, policy rules, room status gate,
//! then the conflict check. The conflict-check-then-insert step is
//! serialized per room so two concurrent requests for overlapping windows
//! in the same room can never both pass.
//!
//! Lifecycle events are published after commit, fire-and-forget: a publish
//! failure is logged and the admitted booking stands.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::clients::notifications::NotificationSink;
use crate::clients::rooms::RoomDirectory;
use crate::clients::DirectoryError;
use crate::domain::{invariants, Actor, Booking, BookingStatus, RoomStatus, TimeRange};
use crate::engine::commands::{CancelBookingCommand, CreateBookingCommand};
use crate::events::{BookingEvent, BookingNotification, RoomRef, UserRef};
use crate::store::{BookingStore, SortOrder, StoreError};

/// Display name used in cancellation notices when the room directory
/// cannot be reached
const FALLBACK_ROOM_NAME: &str = "Sala";

/// Errors from the booking admission engine
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// A business rule rejected the request
    #[error(transparent)]
    Rule(#[from] invariants::RuleViolation),

    /// The room does not exist or the room directory could not be reached
    ///
    /// The two cases are deliberately conflated: either way the engine
    /// cannot establish that the room is bookable.
    #[error("Room {0} is unavailable")]
    RoomUnavailable(Uuid),

    /// The room exists but its status does not admit bookings
    #[error("Room {room_id} is not bookable (status {status})")]
    RoomNotBookable { room_id: Uuid, status: RoomStatus },

    /// A confirmed booking already holds an overlapping window
    #[error("Room {room_id} is already booked for an overlapping window")]
    TimeConflict {
        room_id: Uuid,
        conflicting_booking: Uuid,
    },

    /// No booking with the given id
    #[error("Booking {0} not found")]
    NotFound(Uuid),

    /// The actor may not act on this booking
    #[error("Actor is not allowed to modify this booking")]
    Forbidden,

    /// Persistence failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Serializes admissions and answers booking queries
pub struct BookingEngine {
    store: Arc<dyn BookingStore>,
    rooms: Arc<dyn RoomDirectory>,
    notifications: Arc<dyn NotificationSink>,
    room_locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl BookingEngine {
    /// Create a new admission engine
    pub fn new(
        store: Arc<dyn BookingStore>,
        rooms: Arc<dyn RoomDirectory>,
        notifications: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            store,
            rooms,
            notifications,
            room_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Admit a booking request
    ///
    /// # Admission sequence
    /// 1. Interval must be well-formed (`end > start`)
    /// 2. Minimum notice: start at least 15 minutes after the command
    ///    timestamp
    /// 3. Maximum duration: at most 4 hours
    /// 4. The room must exist and be `AVAILABLE`
    /// 5. No confirmed booking for the room may overlap the window
    ///    (half-open; touching intervals do not conflict)
    ///
    /// Steps 5 and the insert run under a per-room lock.
    pub async fn create(
        &self,
        command: CreateBookingCommand,
        actor: &Actor,
    ) -> Result<Booking, BookingError> {
        let interval = invariants::validate_interval(command.start, command.end)?;
        invariants::validate_minimum_notice(&interval, command.timestamp)?;
        invariants::validate_maximum_duration(&interval)?;

        let room = self
            .rooms
            .find_room(command.room_id)
            .await
            .map_err(|e| self.room_lookup_error(command.room_id, e))?;

        if !room.status.is_bookable() {
            return Err(BookingError::RoomNotBookable {
                room_id: command.room_id,
                status: room.status,
            });
        }

        let lock = self.room_lock(command.room_id).await;
        let _admission = lock.lock().await;

        if let Some(existing) = self.store.find_conflict(command.room_id, &interval).await? {
            return Err(BookingError::TimeConflict {
                room_id: command.room_id,
                conflicting_booking: existing.id,
            });
        }

        let booking = Booking {
            id: Uuid::now_v7(),
            room_id: command.room_id,
            user_id: actor.user_id,
            user_email: actor.email.clone(),
            interval,
            status: BookingStatus::Confirmed,
            created_by: actor.user_id,
            last_modified_by: actor.user_id,
            created_at: command.timestamp,
            updated_at: command.timestamp,
        };
        self.store.insert(booking.clone()).await?;
        drop(_admission);

        info!(
            booking_id = %booking.id,
            room_id = %booking.room_id,
            user_id = %booking.user_id,
            "Booking admitted"
        );

        self.emit(BookingEvent::BookingCreated(BookingNotification {
            event_version: crate::clients::SCHEMA_VERSION,
            event_id: Uuid::now_v7(),
            booking_id: booking.id,
            interval: booking.interval,
            user: UserRef {
                id: actor.user_id,
                email: actor.email.clone(),
            },
            room: RoomRef { name: room.name },
            timestamp: command.timestamp,
            correlation_id: command.correlation_id,
        }))
        .await;

        Ok(booking)
    }

    /// Cancel a confirmed booking
    ///
    /// Owners may cancel their own bookings; administrators may cancel any.
    /// Cancellation is terminal and only allowed before the booking starts.
    /// Returns the booking in its cancelled state.
    pub async fn cancel(
        &self,
        command: CancelBookingCommand,
        actor: &Actor,
    ) -> Result<Booking, BookingError> {
        let booking = self
            .store
            .get(command.booking_id)
            .await?
            .ok_or(BookingError::NotFound(command.booking_id))?;

        if !actor.may_cancel(&booking) {
            return Err(BookingError::Forbidden);
        }

        invariants::validate_cancellable(booking.status, &booking.interval, command.timestamp)?;

        let mut cancelled = booking;
        cancelled.status = BookingStatus::Cancelled;
        cancelled.last_modified_by = actor.user_id;
        cancelled.updated_at = command.timestamp;
        self.store.update(cancelled.clone()).await?;

        info!(
            booking_id = %cancelled.id,
            actor_id = %actor.user_id,
            "Booking cancelled"
        );

        // Best-effort name lookup for the notice; the cancellation is
        // already committed, so a directory failure only degrades the
        // display name.
        let room_name = match self.rooms.find_room(cancelled.room_id).await {
            Ok(room) => room.name,
            Err(e) => {
                warn!(
                    room_id = %cancelled.room_id,
                    error = %e,
                    "Room name lookup failed for cancellation notice"
                );
                FALLBACK_ROOM_NAME.to_string()
            }
        };

        // The notice goes to the booking owner, not whoever cancelled
        self.emit(BookingEvent::BookingCancelled(BookingNotification {
            event_version: crate::clients::SCHEMA_VERSION,
            event_id: Uuid::now_v7(),
            booking_id: cancelled.id,
            interval: cancelled.interval,
            user: UserRef {
                id: cancelled.user_id,
                email: cancelled.user_email.clone(),
            },
            room: RoomRef { name: room_name },
            timestamp: command.timestamp,
            correlation_id: command.correlation_id,
        }))
        .await;

        Ok(cancelled)
    }

    /// Confirmed bookings held by one user, ordered by start ascending
    pub async fn find_for_user(&self, user_id: Uuid) -> Result<Vec<Booking>, BookingError> {
        Ok(self.store.find_confirmed_for_user(user_id).await?)
    }

    /// All confirmed bookings (admin projection)
    pub async fn find_all(&self, order: SortOrder) -> Result<Vec<Booking>, BookingError> {
        Ok(self.store.find_all_confirmed(order).await?)
    }

    /// Confirmed bookings for a room that overlap the given window
    ///
    /// Fails with [`BookingError::RoomUnavailable`] when the room does not
    /// exist, so callers can distinguish "no bookings" from "no such room".
    pub async fn room_availability(
        &self,
        room_id: Uuid,
        window: &TimeRange,
    ) -> Result<Vec<Booking>, BookingError> {
        self.rooms
            .find_room(room_id)
            .await
            .map_err(|e| self.room_lookup_error(room_id, e))?;

        Ok(self.store.find_confirmed_for_room(room_id, window).await?)
    }

    fn room_lookup_error(&self, room_id: Uuid, error: DirectoryError) -> BookingError {
        warn!(%room_id, error = %error, "Room lookup failed");
        BookingError::RoomUnavailable(room_id)
    }

    async fn room_lock(&self, room_id: Uuid) -> Arc<Mutex<()>> {
        let mut locks = self.room_locks.lock().await;
        // Drop entries no admission currently holds so the map stays
        // bounded by in-flight rooms, not every room ever booked
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        locks
            .entry(room_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    async fn emit(&self, event: BookingEvent) {
        if let Err(e) = self.notifications.publish(&event).await {
            warn!(
                subject = %event.subject(),
                error = %e,
                "Event publish failed; booking state is unaffected"
            );
        }
    }
}
