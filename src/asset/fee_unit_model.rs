//! Static per-asset fee data: fallback schedules and cost table profiles.
//!
//! Lookups take the raw asset identifier so callers holding an unchecked id
//! get an [`TrackerError::UnsupportedAsset`] back instead of a silent default.

use super::{Asset, TransactionProfile};
use crate::{error::TrackerError, fees::FeeSchedule};

pub fn default_schedule(asset_id: &str) -> Result<FeeSchedule, TrackerError> {
    let asset: Asset = asset_id.parse()?;
    Ok(asset.network().default_schedule())
}

pub fn transaction_profiles(asset_id: &str) -> Result<&'static [TransactionProfile], TrackerError> {
    let asset: Asset = asset_id.parse()?;
    Ok(asset.network().transaction_profiles())
}

pub fn fee_unit(asset_id: &str) -> Result<&'static str, TrackerError> {
    let asset: Asset = asset_id.parse()?;
    Ok(asset.network().unit())
}
