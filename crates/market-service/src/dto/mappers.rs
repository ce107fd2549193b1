//! Entity to response DTO mappers

use market_core::entities::{Notification, Reaction};

use super::responses::{NotificationResponse, ReactionResponse};

impl From<&Reaction> for ReactionResponse {
    fn from(reaction: &Reaction) -> Self {
        Self {
            id: reaction.id.clone(),
            content_id: reaction.content_id.clone(),
            content_type: reaction.content_type,
            kind: reaction.kind,
            user_id: reaction.user_id.clone(),
            content_owner_id: reaction.content_owner_id.clone(),
            created_time: reaction.created_time,
        }
    }
}

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.clone(),
            user_id: notification.user_id.clone(),
            reason: notification.reason.as_str().to_string(),
            source_id: notification.source_id.clone(),
            source_content_type: notification.source_content_type,
            source_content_id: notification.source_content_id.clone(),
            source_user_id: notification.source_user_id.clone(),
            source_user_name: notification.source_user_name.clone(),
            source_user_username: notification.source_user_username.clone(),
            source_text: notification.source_text.clone(),
            source_contract_id: notification.source_contract_id.clone(),
            source_contract_slug: notification.source_contract_slug.clone(),
            is_seen: notification.is_seen,
            created_time: notification.created_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_core::entities::NotificationReason;
    use market_core::value_objects::{ContentType, EntityId};

    #[test]
    fn test_reaction_response_mapping() {
        let reaction = Reaction::like(
            EntityId::new("r1"),
            EntityId::new("c1"),
            ContentType::Contract,
            EntityId::new("alice"),
            EntityId::new("bob"),
        );

        let response = ReactionResponse::from(&reaction);
        assert_eq!(response.id, EntityId::new("r1"));
        assert_eq!(response.content_type, ContentType::Contract);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""content_type":"contract""#));
        assert!(json.contains(r#""kind":"like""#));
    }

    #[test]
    fn test_notification_response_mapping() {
        let notification = Notification::new(
            EntityId::new("n1"),
            EntityId::new("bob"),
            NotificationReason::Like,
            EntityId::new("r1"),
            ContentType::Comment,
            EntityId::new("cm1"),
            EntityId::new("alice"),
            "Alice".to_string(),
            "alice".to_string(),
        );

        let response = NotificationResponse::from(&notification);
        assert_eq!(response.reason, "like");
        assert!(!response.is_seen);

        // Unset optionals are omitted from the JSON body
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("source_contract_id"));
    }
}
