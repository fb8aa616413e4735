use crate::{asset::Asset, error::TrackerError, fees::FeeSchedule, price::PriceQuotes};

/// Result of one combined fee + price fetch, tagged with the selection
/// generation and sequence number it was issued under.
#[derive(Debug)]
pub struct CycleOutcome {
    pub asset: Asset,
    pub generation: u64,
    pub sequence: u64,
    pub schedule: FeeSchedule,
    pub prices: Result<PriceQuotes, TrackerError>,
}
