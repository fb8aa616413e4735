use crate::{
    asset::{Asset, TransactionProfile},
    fees::{FeeSchedule, FeeTier},
    price::PriceSnapshot,
};

use super::CostRow;

/// USD cost of `profile` at `tier`. Degrades to zero instead of failing when
/// the price or the fee value is unusable.
pub fn compute_cost(
    asset: Asset,
    schedule: &FeeSchedule,
    tier: FeeTier,
    profile: &TransactionProfile,
    prices: &PriceSnapshot,
) -> f64 {
    let Some(price) = prices.usd(asset).filter(|price| price.is_finite()) else {
        return 0.0;
    };
    let fee = schedule.tier(tier);
    if !fee.is_finite() {
        return 0.0;
    }
    asset.network().native_fee(fee, profile.fee_units) * price
}

pub fn cost_table(asset: Asset, schedule: &FeeSchedule, prices: &PriceSnapshot) -> Vec<CostRow> {
    asset
        .network()
        .transaction_profiles()
        .iter()
        .map(|profile| CostRow {
            profile: *profile,
            costs: FeeTier::ALL
                .map(|tier| (tier, compute_cost(asset, schedule, tier, profile, prices))),
        })
        .collect()
}
