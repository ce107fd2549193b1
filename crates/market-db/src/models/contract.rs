//! Contract database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for contracts table
#[derive(Debug, Clone, FromRow)]
pub struct ContractModel {
    pub id: String,
    pub creator_id: String,
    pub question: String,
    pub slug: String,
    pub created_time: DateTime<Utc>,
}
