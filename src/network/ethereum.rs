use async_trait::async_trait;
use tracing::instrument;

use super::FeeNetwork;
use crate::{
    asset::{Asset, TransactionProfile},
    error::TrackerError,
    fees::{derive_instant, FeeSchedule, GasOracleResult},
    upstream::Upstream,
};

const GWEI_PER_ETH: f64 = 1e9;

const SLOW: f64 = 15.0;
const STANDARD: f64 = 25.0;
const FAST: f64 = 35.0;
const INSTANT: f64 = 50.0;

static PROFILES: [TransactionProfile; 5] = [
    TransactionProfile::new("Simple Transfer", 21_000),
    TransactionProfile::new("ERC-20 Transfer", 65_000),
    TransactionProfile::new("Uniswap Swap", 150_000),
    TransactionProfile::new("NFT Mint", 200_000),
    TransactionProfile::new("DeFi Transaction", 350_000),
];

#[derive(Debug, Clone, Copy)]
pub struct Ethereum;

impl Ethereum {
    /// Maps an accepted oracle result onto the four tiers. Each unusable
    /// field falls back to its own default; `instant` is only derived when
    /// the oracle reported a fast price.
    pub fn schedule_from_oracle(&self, result: &GasOracleResult) -> FeeSchedule {
        let fast = result.fast();
        FeeSchedule::new(
            result.safe().unwrap_or(SLOW),
            result.propose().unwrap_or(STANDARD),
            fast.unwrap_or(FAST),
            fast.map(derive_instant).unwrap_or(INSTANT),
            self.unit(),
        )
    }
}

#[async_trait]
impl FeeNetwork for Ethereum {
    fn asset(&self) -> Asset {
        Asset::Ethereum
    }

    fn unit(&self) -> &'static str {
        "gwei"
    }

    fn default_schedule(&self) -> FeeSchedule {
        FeeSchedule::new(SLOW, STANDARD, FAST, INSTANT, self.unit())
    }

    fn transaction_profiles(&self) -> &'static [TransactionProfile] {
        &PROFILES
    }

    fn native_fee(&self, tier_value: f64, fee_units: u64) -> f64 {
        tier_value * fee_units as f64 / GWEI_PER_ETH
    }

    #[instrument(skip_all)]
    async fn fetch_schedule(&self, upstream: &Upstream) -> Result<FeeSchedule, TrackerError> {
        let response = upstream.gas_oracle().await?;
        if !response.is_ok() {
            tracing::warn!("gas oracle rejected the request: {:?}", response);
            return Err(TrackerError::malformed(format!(
                "gas oracle status {} ({})",
                response.status,
                response.message.unwrap_or_default()
            )));
        }
        let result: GasOracleResult = serde_json::from_value(response.result)
            .map_err(|e| TrackerError::malformed(format!("gas oracle result: {}", e)))?;
        tracing::info!("gas oracle result: {:?}", result);
        Ok(self.schedule_from_oracle(&result))
    }
}
