//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: String,
    pub username: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub created_time: DateTime<Utc>,
}
