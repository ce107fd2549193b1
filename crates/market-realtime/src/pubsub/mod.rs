//! Redis Pub/Sub module.
//!
//! Provides publish functionality for real-time event distribution.

mod channels;
mod publisher;

pub use channels::{PubSubChannel, BROADCAST_CHANNEL, COMMENT_CHANNEL_PREFIX, CONTRACT_CHANNEL_PREFIX, USER_CHANNEL_PREFIX};
pub use publisher::{PubSubEvent, Publisher};
