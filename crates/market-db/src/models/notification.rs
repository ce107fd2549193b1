//! Notification database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for notifications table
#[derive(Debug, Clone, FromRow)]
pub struct NotificationModel {
    pub id: String,
    pub user_id: String,
    pub reason: String,
    pub source_id: String,
    pub source_content_type: String,
    pub source_content_id: String,
    pub source_user_id: String,
    pub source_user_name: String,
    pub source_user_username: String,
    pub source_text: Option<String>,
    pub source_contract_id: Option<String>,
    pub source_contract_slug: Option<String>,
    pub is_seen: bool,
    pub created_time: DateTime<Utc>,
}
