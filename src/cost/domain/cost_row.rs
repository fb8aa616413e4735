use serde::Serialize;

use crate::{asset::TransactionProfile, fees::FeeTier};

/// One line of the cost table: a transaction profile priced at every tier.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CostRow {
    pub profile: TransactionProfile,
    pub costs: [(FeeTier, f64); 4],
}

impl CostRow {
    pub fn cost(&self, tier: FeeTier) -> f64 {
        self.costs
            .iter()
            .find(|(row_tier, _)| *row_tier == tier)
            .map(|(_, cost)| *cost)
            .unwrap_or_default()
    }
}
