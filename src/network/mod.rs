//! Per-network fee capabilities.
//!
//! Each supported chain implements [`FeeNetwork`] once; [`crate::asset::Asset::network`]
//! is the only place that maps an asset onto its implementation.

mod bitcoin;
mod ethereum;
mod solana;

pub use bitcoin::Bitcoin;
pub use ethereum::Ethereum;
pub use solana::Solana;

use crate::{
    asset::{Asset, TransactionProfile},
    error::TrackerError,
    fees::FeeSchedule,
    upstream::Upstream,
};
use async_trait::async_trait;

#[async_trait]
pub trait FeeNetwork: Send + Sync {
    fn asset(&self) -> Asset;

    /// Canonical display unit of this network's fee tiers.
    fn unit(&self) -> &'static str;

    /// Compiled-in schedule used at startup and whenever the oracle fails.
    fn default_schedule(&self) -> FeeSchedule;

    fn transaction_profiles(&self) -> &'static [TransactionProfile];

    /// Fee in the network's native asset for `fee_units` at `tier_value`.
    fn native_fee(&self, tier_value: f64, fee_units: u64) -> f64;

    /// Renders a tier value for people; the schedule itself is never rescaled.
    fn format_fee(&self, tier_value: f64) -> String {
        format!("{} {}", tier_value, self.unit())
    }

    async fn fetch_schedule(&self, upstream: &Upstream) -> Result<FeeSchedule, TrackerError>;
}
