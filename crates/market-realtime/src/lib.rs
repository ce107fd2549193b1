//! # market-realtime
//!
//! Redis-backed realtime layer. Reaction and notification mutations publish
//! events here; WebSocket edges and other consumers subscribe to the
//! per-content and per-user channels to keep clients fresh.

pub mod pool;
pub mod pubsub;

use std::sync::Arc;

pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};
pub use pubsub::{PubSubChannel, PubSubEvent, Publisher};

/// Shared, cheaply-cloneable handle to the Redis pool
pub type SharedRedisPool = Arc<RedisPool>;
