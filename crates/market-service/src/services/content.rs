//! Liked-content resolution
//!
//! The `react` operation only carries `(content_type, content_id)`; the
//! content owner and the display metadata embedded in notifications are
//! resolved here.

use market_core::entities::{Comment, Contract};
use market_core::value_objects::{ContentType, EntityId};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Number of characters of a comment body embedded in a notification
const SOURCE_TEXT_MAX_CHARS: usize = 120;

/// The content item a reaction targets, with enough context to notify its owner
#[derive(Debug, Clone)]
pub enum LikedContent {
    Contract(Contract),
    Comment {
        comment: Comment,
        /// The parent market, when it still exists
        contract: Option<Contract>,
    },
}

impl LikedContent {
    /// The user who authored the content (notification recipient)
    pub fn owner_id(&self) -> &EntityId {
        match self {
            Self::Contract(contract) => &contract.creator_id,
            Self::Comment { comment, .. } => &comment.user_id,
        }
    }

    /// Text shown inline in the notification
    pub fn source_text(&self) -> String {
        match self {
            Self::Contract(contract) => contract.question.clone(),
            Self::Comment { comment, .. } => comment.excerpt(SOURCE_TEXT_MAX_CHARS),
        }
    }

    /// The market to link the notification to
    pub fn contract_link(&self) -> Option<(&EntityId, &str)> {
        match self {
            Self::Contract(contract) => Some((&contract.id, contract.slug.as_str())),
            Self::Comment { contract, .. } => {
                contract.as_ref().map(|c| (&c.id, c.slug.as_str()))
            }
        }
    }
}

/// Resolve the content a reaction targets, or fail with a not-found error
pub async fn resolve_liked_content(
    ctx: &ServiceContext,
    content_type: ContentType,
    content_id: &EntityId,
) -> ServiceResult<LikedContent> {
    match content_type {
        ContentType::Contract => {
            let contract = ctx
                .contract_repo()
                .find_by_id(content_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Contract", content_id.to_string()))?;
            Ok(LikedContent::Contract(contract))
        }
        ContentType::Comment => {
            let comment = ctx
                .comment_repo()
                .find_by_id(content_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Comment", content_id.to_string()))?;
            let contract = ctx.contract_repo().find_by_id(&comment.contract_id).await?;
            Ok(LikedContent::Comment { comment, contract })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_and_text_for_contract() {
        let contract = Contract::new(
            EntityId::new("c1"),
            EntityId::new("bob"),
            "Will it rain tomorrow?".to_string(),
            "will-it-rain-tomorrow".to_string(),
        );
        let content = LikedContent::Contract(contract);

        assert_eq!(content.owner_id(), &EntityId::new("bob"));
        assert_eq!(content.source_text(), "Will it rain tomorrow?");
        let (id, slug) = content.contract_link().unwrap();
        assert_eq!(id, &EntityId::new("c1"));
        assert_eq!(slug, "will-it-rain-tomorrow");
    }

    #[test]
    fn test_owner_and_text_for_comment() {
        let comment = Comment::new(
            EntityId::new("cm1"),
            EntityId::new("c1"),
            EntityId::new("bob"),
            "x".repeat(200),
        );
        let content = LikedContent::Comment {
            comment,
            contract: None,
        };

        assert_eq!(content.owner_id(), &EntityId::new("bob"));
        assert!(content.source_text().ends_with("..."));
        assert!(content.contract_link().is_none());
    }
}
