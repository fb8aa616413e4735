use async_trait::async_trait;

use super::FeeNetwork;
use crate::{
    asset::{Asset, TransactionProfile},
    error::TrackerError,
    fees::FeeSchedule,
    upstream::Upstream,
};

const LAMPORTS_PER_DISPLAY_UNIT: f64 = 1_000_000.0;

static PROFILES: [TransactionProfile; 5] = [
    TransactionProfile::new("Simple Transfer", 1),
    TransactionProfile::new("Token Transfer", 1),
    TransactionProfile::new("DEX Swap", 1),
    TransactionProfile::new("NFT Mint", 1),
    TransactionProfile::new("Program Interaction", 1),
];

/// Flat per-signature fee; there is no oracle to ask.
#[derive(Debug, Clone, Copy)]
pub struct Solana;

#[async_trait]
impl FeeNetwork for Solana {
    fn asset(&self) -> Asset {
        Asset::Solana
    }

    fn unit(&self) -> &'static str {
        "SOL"
    }

    fn default_schedule(&self) -> FeeSchedule {
        FeeSchedule::new(0.000005, 0.000005, 0.00001, 0.000015, self.unit())
    }

    fn transaction_profiles(&self) -> &'static [TransactionProfile] {
        &PROFILES
    }

    fn native_fee(&self, tier_value: f64, _fee_units: u64) -> f64 {
        tier_value
    }

    fn format_fee(&self, tier_value: f64) -> String {
        format!("{:.0} lamports", tier_value * LAMPORTS_PER_DISPLAY_UNIT)
    }

    async fn fetch_schedule(&self, _upstream: &Upstream) -> Result<FeeSchedule, TrackerError> {
        Ok(self.default_schedule())
    }
}
