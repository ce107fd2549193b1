//! Content type and reaction kind discriminators

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of content a reaction can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// A prediction market
    Contract,
    /// A comment on a market
    Comment,
}

impl ContentType {
    /// Stable string form used in the database and on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentType {
    type Err = ContentTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contract" => Ok(Self::Contract),
            "comment" => Ok(Self::Comment),
            other => Err(ContentTypeParseError(other.to_string())),
        }
    }
}

/// Error when parsing a ContentType from a string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content type: {0}")]
pub struct ContentTypeParseError(pub String);

/// Kind of reaction a user can leave on content
///
/// Only "like" exists today; the discriminator is stored so new kinds can be
/// added without a schema change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
}

impl ReactionKind {
    /// Stable string form used in the database and on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReactionKind {
    type Err = ReactionKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            other => Err(ReactionKindParseError(other.to_string())),
        }
    }
}

/// Error when parsing a ReactionKind from a string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown reaction kind: {0}")]
pub struct ReactionKindParseError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_round_trip() {
        assert_eq!("contract".parse::<ContentType>(), Ok(ContentType::Contract));
        assert_eq!("comment".parse::<ContentType>(), Ok(ContentType::Comment));
        assert_eq!(ContentType::Contract.as_str(), "contract");
        assert!("market".parse::<ContentType>().is_err());
    }

    #[test]
    fn test_content_type_serde() {
        let json = serde_json::to_string(&ContentType::Comment).unwrap();
        assert_eq!(json, "\"comment\"");
        let back: ContentType = serde_json::from_str("\"contract\"").unwrap();
        assert_eq!(back, ContentType::Contract);
    }

    #[test]
    fn test_reaction_kind_round_trip() {
        assert_eq!("like".parse::<ReactionKind>(), Ok(ReactionKind::Like));
        assert_eq!(ReactionKind::Like.as_str(), "like");
        assert!("heart".parse::<ReactionKind>().is_err());
    }
}
