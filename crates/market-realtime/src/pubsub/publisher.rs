//! Redis Pub/Sub publisher.
//!
//! Publishes reaction and notification events to Redis channels for
//! distribution to connected clients.

use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

use crate::pool::{RedisPool, RedisResult};
use crate::pubsub::PubSubChannel;

/// Event wrapper for Pub/Sub messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PubSubEvent {
    /// Event type name (e.g., "REACTION_ADD", "NOTIFICATION_CREATE")
    pub event_type: String,
    /// Event payload
    pub data: serde_json::Value,
}

impl PubSubEvent {
    /// Create a new event
    #[must_use]
    pub fn new(event_type: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            event_type: event_type.into(),
            data,
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Redis Pub/Sub publisher
#[derive(Clone)]
pub struct Publisher {
    pool: RedisPool,
}

impl Publisher {
    /// Create a new publisher
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Publish an event to a channel, returning the receiver count
    pub async fn publish(&self, channel: &PubSubChannel, event: &PubSubEvent) -> RedisResult<u32> {
        let mut conn = self.pool.get().await?;
        let channel_name = channel.name();
        let payload = event.to_json()?;

        let receivers: u32 = conn.publish(&channel_name, &payload).await?;

        tracing::debug!(
            channel = %channel_name,
            event_type = %event.event_type,
            receivers = receivers,
            "Published event"
        );

        Ok(receivers)
    }

    /// Publish a user-specific event
    pub async fn publish_to_user(
        &self,
        user_id: market_core::EntityId,
        event_type: &str,
        data: serde_json::Value,
    ) -> RedisResult<u32> {
        let event = PubSubEvent::new(event_type, data);
        let channel = PubSubChannel::user(user_id);
        self.publish(&channel, &event).await
    }

    /// Publish an event on a content item's channel
    pub async fn publish_content_event(
        &self,
        content_type: market_core::ContentType,
        content_id: market_core::EntityId,
        event_type: &str,
        data: serde_json::Value,
    ) -> RedisResult<u32> {
        let event = PubSubEvent::new(event_type, data);
        let channel = PubSubChannel::content(content_type, content_id);
        self.publish(&channel, &event).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pubsub_event_creation() {
        let data = serde_json::json!({
            "content_id": "c1",
            "user_id": "u1"
        });

        let event = PubSubEvent::new("REACTION_ADD", data.clone());
        assert_eq!(event.event_type, "REACTION_ADD");
        assert_eq!(event.data, data);
    }

    #[test]
    fn test_event_serialization() {
        let data = serde_json::json!({"content_id": "c1"});
        let event = PubSubEvent::new("REACTION_REMOVE", data);

        let json = event.to_json().unwrap();
        assert!(json.contains("REACTION_REMOVE"));
        assert!(json.contains("c1"));
    }
}
