//! PostgreSQL implementation of ContractRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use market_core::entities::Contract;
use market_core::traits::{ContractRepository, RepoResult};
use market_core::value_objects::EntityId;

use crate::models::ContractModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ContractRepository
#[derive(Clone)]
pub struct PgContractRepository {
    pool: PgPool,
}

impl PgContractRepository {
    /// Create a new PgContractRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContractRepository for PgContractRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &EntityId) -> RepoResult<Option<Contract>> {
        let result = sqlx::query_as::<_, ContractModel>(
            r#"
            SELECT id, creator_id, question, slug, created_time
            FROM contracts
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Contract::from))
    }

    #[instrument(skip(self, contract))]
    async fn create(&self, contract: &Contract) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO contracts (id, creator_id, question, slug, created_time)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(contract.id.as_str())
        .bind(contract.creator_id.as_str())
        .bind(&contract.question)
        .bind(&contract.slug)
        .bind(contract.created_time)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
