use async_trait::async_trait;
use tracing::instrument;

use super::FeeNetwork;
use crate::{
    asset::{Asset, TransactionProfile},
    error::TrackerError,
    fees::{derive_instant, FeeSchedule, RecommendedFees},
    upstream::Upstream,
};

const SATS_PER_BTC: f64 = 1e8;

const SLOW: f64 = 5.0;
const STANDARD: f64 = 10.0;
const FAST: f64 = 20.0;
const INSTANT: f64 = 30.0;

static PROFILES: [TransactionProfile; 5] = [
    TransactionProfile::new("Simple Transfer", 140),
    TransactionProfile::new("Multi-Input TX", 250),
    TransactionProfile::new("SegWit Transfer", 110),
    TransactionProfile::new("Taproot Transfer", 100),
    TransactionProfile::new("Complex Script", 400),
];

#[derive(Debug, Clone, Copy)]
pub struct Bitcoin;

impl Bitcoin {
    /// hour -> slow, half hour -> standard, fastest -> fast. `instant` is
    /// derived from whichever fast value ends up in the schedule.
    pub fn schedule_from_recommended(&self, fees: &RecommendedFees) -> FeeSchedule {
        let fast = fees.fastest().unwrap_or(FAST);
        FeeSchedule::new(
            fees.hour().unwrap_or(SLOW),
            fees.half_hour().unwrap_or(STANDARD),
            fast,
            derive_instant(fast),
            self.unit(),
        )
    }
}

#[async_trait]
impl FeeNetwork for Bitcoin {
    fn asset(&self) -> Asset {
        Asset::Bitcoin
    }

    fn unit(&self) -> &'static str {
        "sat/vB"
    }

    fn default_schedule(&self) -> FeeSchedule {
        FeeSchedule::new(SLOW, STANDARD, FAST, INSTANT, self.unit())
    }

    fn transaction_profiles(&self) -> &'static [TransactionProfile] {
        &PROFILES
    }

    fn native_fee(&self, tier_value: f64, fee_units: u64) -> f64 {
        tier_value * fee_units as f64 / SATS_PER_BTC
    }

    #[instrument(skip_all)]
    async fn fetch_schedule(&self, upstream: &Upstream) -> Result<FeeSchedule, TrackerError> {
        let fees = upstream.recommended_fees().await?;
        tracing::info!("recommended fees: {:?}", fees);
        Ok(self.schedule_from_recommended(&fees))
    }
}
