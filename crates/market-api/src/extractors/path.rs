//! Path parameter extractors
//!
//! Type-safe parsing of content and notification ids from path parameters.

use market_core::{ContentType, EntityId};

use crate::response::ApiError;

/// Path parameters addressing a content item
#[derive(Debug, serde::Deserialize)]
pub struct ContentPath {
    pub content_type: String,
    pub content_id: String,
}

impl ContentPath {
    /// Parse content_type
    pub fn content_type(&self) -> Result<ContentType, ApiError> {
        self.content_type
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid content_type (expected contract or comment)"))
    }

    /// Parse content_id
    pub fn content_id(&self) -> Result<EntityId, ApiError> {
        self.content_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid content_id format"))
    }
}

/// Path parameters with notification_id
#[derive(Debug, serde::Deserialize)]
pub struct NotificationIdPath {
    pub notification_id: String,
}

impl NotificationIdPath {
    /// Parse notification_id
    pub fn notification_id(&self) -> Result<EntityId, ApiError> {
        self.notification_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid notification_id format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_path_parsing() {
        let path = ContentPath {
            content_type: "contract".to_string(),
            content_id: "c1".to_string(),
        };
        assert_eq!(path.content_type().unwrap(), ContentType::Contract);
        assert_eq!(path.content_id().unwrap(), EntityId::new("c1"));
    }

    #[test]
    fn test_content_path_rejects_unknown_type() {
        let path = ContentPath {
            content_type: "market".to_string(),
            content_id: "c1".to_string(),
        };
        assert!(path.content_type().is_err());
    }

    #[test]
    fn test_content_path_rejects_bad_id() {
        let path = ContentPath {
            content_type: "comment".to_string(),
            content_id: "not valid!".to_string(),
        };
        assert!(path.content_id().is_err());
    }
}
