use crate::{asset::Asset, error::TrackerError};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};
use tracing::instrument;

use super::FeeSchedule;

/// Anything that can produce a live fee schedule for an asset.
#[async_trait]
pub trait FeeSource: Debug + Send + Sync {
    async fn fetch_schedule(&self, asset: Asset) -> Result<FeeSchedule, TrackerError>;
}

/// Wraps a [`FeeSource`] and never fails: any upstream error is replaced by
/// the asset's default schedule, stamped with the time of the fallback.
#[derive(Debug, Clone)]
pub struct FeeFetcher {
    source: Arc<dyn FeeSource>,
}

impl FeeFetcher {
    pub fn new(source: Arc<dyn FeeSource>) -> Self {
        Self { source }
    }

    #[instrument(skip(self))]
    pub async fn fetch(&self, asset: Asset) -> FeeSchedule {
        match self.source.fetch_schedule(asset).await {
            Ok(schedule) => {
                tracing::debug!("fee schedule for {}: {:?}", asset, schedule);
                schedule
            }
            Err(e) => {
                tracing::warn!("{} fee oracle failed, using defaults: {:?}", asset.name(), e);
                asset.network().default_schedule()
            }
        }
    }
}
