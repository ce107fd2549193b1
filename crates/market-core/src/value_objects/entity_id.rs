//! Entity ID - opaque string identifier shared by all stored objects
//!
//! The upstream data store keys rows by short random base-62 strings rather
//! than sequential integers, so ids are treated as opaque text everywhere.

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Length of generated ids
const GENERATED_ID_LEN: usize = 12;

/// Maximum accepted id length when parsing external input
const MAX_ID_LEN: usize = 64;

/// Opaque string identifier for users, contracts, comments, reactions, and notifications
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(String);

impl EntityId {
    /// Create an EntityId from a trusted string (e.g. a database row)
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random base-62 id
    pub fn random() -> Self {
        let id: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(GENERATED_ID_LEN)
            .map(char::from)
            .collect();
        Self(id)
    }

    /// Get the id as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the id, returning the inner string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Parse and validate an id from external input
    ///
    /// Accepts 1-64 characters from `[A-Za-z0-9_-]`.
    pub fn parse(s: &str) -> Result<Self, EntityIdParseError> {
        if s.is_empty() || s.len() > MAX_ID_LEN {
            return Err(EntityIdParseError::InvalidLength);
        }
        if !s
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
        {
            return Err(EntityIdParseError::InvalidCharacter);
        }
        Ok(Self(s.to_string()))
    }
}

/// Error when parsing an EntityId from external input
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EntityIdParseError {
    #[error("id must be 1-64 characters")]
    InvalidLength,
    #[error("id contains invalid characters")]
    InvalidCharacter,
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EntityId {
    type Err = EntityIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityId::parse(s)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EntityId::parse(&s).map_err(serde::de::Error::custom)
    }
}
