//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: String,
    pub content_id: String,
    pub content_type: String,
    pub kind: String,
    pub user_id: String,
    pub content_owner_id: String,
    pub created_time: DateTime<Utc>,
}
