// Copyright (c) 2025 - Cowboy AI, Inc.
//! Notification Sink
//!
//! Fire-and-forget publishing of booking lifecycle events. The engines call
//! this after committing; a publish failure is reported through the result
//! so the caller can log it, but it never rolls back the committed booking.

use async_trait::async_trait;
use tracing::debug;

use crate::errors::RpcResult;
use crate::events::BookingEvent;
use crate::nats::NatsClient;

/// Fire-and-forget event publishing capability
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Publish a booking lifecycle event, at-most-once, best effort
    async fn publish(&self, event: &BookingEvent) -> RpcResult<()>;
}

/// Notification sink backed by NATS publish
#[derive(Clone)]
pub struct NatsNotificationSink {
    client: NatsClient,
}

impl NatsNotificationSink {
    /// Create a new notification sink
    pub fn new(client: NatsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NotificationSink for NatsNotificationSink {
    async fn publish(&self, event: &BookingEvent) -> RpcResult<()> {
        let subject = event.subject();
        self.client.publish(&subject, event).await?;

        debug!(
            subject = %subject,
            booking_id = %event.notification().booking_id,
            "Booking event published"
        );
        Ok(())
    }
}
