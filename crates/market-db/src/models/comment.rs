//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: String,
    pub contract_id: String,
    pub user_id: String,
    pub text: String,
    pub created_time: DateTime<Utc>,
}
