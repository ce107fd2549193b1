//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Toggle a reaction on a content item
///
/// `content_id` and `content_type` arrive as strings and are parsed into
/// domain types at the handler boundary.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReactRequest {
    #[validate(length(min = 1, max = 64, message = "content_id must be 1-64 characters"))]
    pub content_id: String,

    #[validate(length(min = 1, max = 32, message = "content_type is required"))]
    pub content_type: String,

    /// true removes the caller's existing reaction, false adds one
    #[serde(default)]
    pub remove: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_react_request_defaults_remove_to_false() {
        let req: ReactRequest =
            serde_json::from_str(r#"{"content_id": "c1", "content_type": "contract"}"#).unwrap();
        assert_eq!(req.content_id, "c1");
        assert!(!req.remove);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_react_request_validation() {
        let req = ReactRequest {
            content_id: String::new(),
            content_type: "contract".to_string(),
            remove: false,
        };
        assert!(req.validate().is_err());

        let req = ReactRequest {
            content_id: "a".repeat(65),
            content_type: "contract".to_string(),
            remove: false,
        };
        assert!(req.validate().is_err());
    }
}
