use serde::Serialize;

use super::CycleOutcome;
use crate::{
    asset::{Asset, TransactionProfile},
    cost::{compute_cost, cost_table, CostRow},
    fees::{FeeSchedule, FeeTier},
    price::PriceSnapshot,
};

/// The snapshot currently on display. Never mutated in place: every
/// completed refresh cycle produces a new value.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AggregateState {
    pub selected_asset: Asset,
    pub schedule: FeeSchedule,
    pub prices: PriceSnapshot,
    pub is_live: bool,
    pub generation: u64,
}

impl AggregateState {
    pub fn bootstrap(asset: Asset) -> Self {
        Self {
            selected_asset: asset,
            schedule: asset.network().default_schedule(),
            prices: PriceSnapshot::bootstrap(),
            is_live: false,
            generation: 0,
        }
    }

    /// Applies a finished cycle. A failed price call keeps the current
    /// prices and marks the state as not live.
    pub fn advance(&self, outcome: CycleOutcome) -> Self {
        let (prices, is_live) = match &outcome.prices {
            Ok(quotes) => (self.prices.merged(quotes), true),
            Err(_) => (self.prices.clone(), false),
        };
        Self {
            selected_asset: outcome.asset,
            schedule: outcome.schedule,
            prices,
            is_live,
            generation: outcome.generation,
        }
    }

    pub fn transaction_profiles(&self) -> &'static [TransactionProfile] {
        self.selected_asset.network().transaction_profiles()
    }

    pub fn cost(&self, tier: FeeTier, profile: &TransactionProfile) -> f64 {
        compute_cost(
            self.selected_asset,
            &self.schedule,
            tier,
            profile,
            &self.prices,
        )
    }

    pub fn cost_table(&self) -> Vec<CostRow> {
        cost_table(self.selected_asset, &self.schedule, &self.prices)
    }

    pub fn formatted_tier(&self, tier: FeeTier) -> String {
        self.selected_asset
            .network()
            .format_fee(self.schedule.tier(tier))
    }
}
