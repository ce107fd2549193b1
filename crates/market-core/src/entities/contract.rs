//! Contract entity - a prediction market

use chrono::{DateTime, Utc};

use crate::value_objects::EntityId;

/// Contract entity (a market)
///
/// The full market model (outcomes, probabilities, resolution) lives in the
/// trading system; reactions and notifications only need authorship and
/// display metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contract {
    pub id: EntityId,
    /// The user who created the market
    pub creator_id: EntityId,
    /// Market question, e.g. "Will it rain tomorrow?"
    pub question: String,
    /// URL slug for linking from notifications
    pub slug: String,
    pub created_time: DateTime<Utc>,
}

impl Contract {
    /// Create a new Contract
    pub fn new(id: EntityId, creator_id: EntityId, question: String, slug: String) -> Self {
        Self {
            id,
            creator_id,
            question,
            slug,
            created_time: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_creation() {
        let contract = Contract::new(
            EntityId::new("c1"),
            EntityId::new("u1"),
            "Will it rain tomorrow?".to_string(),
            "will-it-rain-tomorrow".to_string(),
        );
        assert_eq!(contract.creator_id, EntityId::new("u1"));
        assert_eq!(contract.slug, "will-it-rain-tomorrow");
    }
}
