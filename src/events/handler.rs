// Copyright (c) 2025 - Cowboy AI, Inc.
//! Booking Event Subscription Handler
//!
//! Consumer-side counterpart of [`NotificationSink`](crate::clients::NotificationSink):
//! adapts the generic message loop to typed [`BookingEvent`]s. The
//! notification service runs this handler under a
//! [`MessageProcessor`](crate::nats::MessageProcessor) subscribed to
//! `reservations.bookings.>`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::RpcResult;
use crate::events::BookingEvent;
use crate::nats::MessageHandler;
use crate::subjects::subjects;

/// Typed consumer of booking lifecycle events
#[async_trait]
pub trait BookingEventConsumer: Send + Sync {
    /// Process one event; errors are logged by the message loop
    async fn consume(&self, event: BookingEvent) -> RpcResult<()>;
}

/// Message handler decoding booking events for a consumer
pub struct BookingEventHandler<C> {
    consumer: Arc<C>,
    subject: String,
}

impl<C> BookingEventHandler<C>
where
    C: BookingEventConsumer,
{
    /// Handler subscribed to every booking lifecycle event
    pub fn new(consumer: Arc<C>) -> Self {
        Self {
            consumer,
            subject: subjects::all_booking_events(),
        }
    }
}

#[async_trait]
impl<C> MessageHandler for BookingEventHandler<C>
where
    C: BookingEventConsumer + 'static,
{
    type Message = serde_json::Value;

    async fn handle(&self, message: Self::Message) -> RpcResult<()> {
        let event: BookingEvent = serde_json::from_value(message)?;

        debug!(
            booking_id = %event.notification().booking_id,
            subject = %event.subject(),
            "Booking event received"
        );

        self.consumer.consume(event).await
    }

    fn subject(&self) -> &str {
        &self.subject
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimeRange;
    use crate::events::{BookingNotification, RoomRef, UserRef};
    use chrono::{TimeZone, Utc};
    use std::sync::Mutex;
    use uuid::Uuid;

    struct RecordingConsumer {
        seen: Mutex<Vec<BookingEvent>>,
    }

    #[async_trait]
    impl BookingEventConsumer for RecordingConsumer {
        async fn consume(&self, event: BookingEvent) -> RpcResult<()> {
            self.seen.lock().unwrap().push(event);
            Ok(())
        }
    }

    fn created_event() -> BookingEvent {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 1, 1, 11, 0, 0).unwrap();
        BookingEvent::BookingCreated(BookingNotification {
            event_version: 1,
            event_id: Uuid::nil(),
            booking_id: Uuid::nil(),
            interval: TimeRange::new(start, end).unwrap(),
            user: UserRef {
                id: Uuid::nil(),
                email: "user@example.com".to_string(),
            },
            room: RoomRef {
                name: "Sala Aurora".to_string(),
            },
            timestamp: start,
            correlation_id: Uuid::nil(),
        })
    }

    #[tokio::test]
    async fn test_handler_decodes_and_forwards_events() {
        let consumer = Arc::new(RecordingConsumer {
            seen: Mutex::new(vec![]),
        });
        let handler = BookingEventHandler::new(consumer.clone());
        assert_eq!(handler.subject(), "reservations.bookings.>");

        let event = created_event();
        let payload = serde_json::to_value(&event).unwrap();
        handler.handle(payload).await.unwrap();

        let seen = consumer.seen.lock().unwrap();
        assert_eq!(seen.as_slice(), &[event]);
    }

    #[tokio::test]
    async fn test_handler_rejects_malformed_payload() {
        let consumer = Arc::new(RecordingConsumer {
            seen: Mutex::new(vec![]),
        });
        let handler = BookingEventHandler::new(consumer.clone());

        let result = handler
            .handle(serde_json::json!({"event_type": "unknown"}))
            .await;

        assert!(result.is_err());
        assert!(consumer.seen.lock().unwrap().is_empty());
    }
}
